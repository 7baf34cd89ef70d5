//! Price resolution for calendar dates
//!
//! Payout dates are calendar month starts, which are often non-trading
//! days. Resolution looks forward to the nearest observation at or after
//! the target date; it never looks backward. Substituting a backward
//! lookup is a behavior change, not a cleanup.

use chrono::NaiveDate;

use crate::series::{PricePoint, PriceSeries};

/// Earliest observation with date >= `target`
///
/// An exact match on `target` wins. Returns `None` when the target lies
/// beyond the end of the series.
pub fn price_on_or_after(series: &PriceSeries, target: NaiveDate) -> Option<&PricePoint> {
    let points = series.points();
    let idx = points.partition_point(|p| p.date < target);
    points.get(idx)
}
