//! Trailing lookback baseline
//!
//! Mean closing price over a calendar-day window ending just before a
//! reference date. The window is wall-clock days, not trading-day samples.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::series::PriceSeries;

/// Default lookback window length in calendar days
pub const DEFAULT_WINDOW_DAYS: i64 = 180;

/// Default minimum observations required inside the window
pub const DEFAULT_MIN_SAMPLES: usize = 30;

/// Lookback window parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    /// Window length in calendar days
    pub window_days: i64,
    /// Minimum observations required for a usable average
    pub min_samples: usize,
}

impl Default for LookbackWindow {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}

/// Trailing mean close over `[reference - window_days, reference)`
///
/// The reference date itself is excluded. Returns `None` when fewer than
/// `min_samples` observations fall inside the window, which guards against
/// thin coverage at the start of the dataset.
pub fn lookback_average(
    series: &PriceSeries,
    reference: NaiveDate,
    window: LookbackWindow,
) -> Option<Decimal> {
    let start = reference - Duration::days(window.window_days);

    let mut sum = Decimal::ZERO;
    let mut count = 0usize;
    for point in series.points() {
        if point.date >= reference {
            break;
        }
        if point.date >= start {
            sum += point.close;
            count += 1;
        }
    }

    if count < window.min_samples {
        return None;
    }
    Some(sum / Decimal::from(count as u64))
}
