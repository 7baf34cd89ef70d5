//! Price history loading
//!
//! Reads a JSON array of `{"date": "YYYY-MM-DD", "close": <decimal>}` rows
//! and establishes the series invariant (ascending dates, no duplicates,
//! positive closes) before the engine ever sees the data.

use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use super::{PricePoint, PriceSeries};

/// Errors from loading a price history file
#[derive(Debug, Error)]
pub enum SeriesError {
    /// File could not be read
    #[error("failed to read price file: {0}")]
    Io(#[from] std::io::Error),
    /// File contents are not the expected JSON shape
    #[error("failed to parse price file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two rows share the same date
    #[error("duplicate observation for {0}")]
    DuplicateDate(chrono::NaiveDate),
    /// A close price was zero or negative
    #[error("non-positive close {1} on {0}")]
    NonPositiveClose(chrono::NaiveDate, Decimal),
}

/// Load a price series from a JSON file
///
/// Rows may appear in any order; the result is sorted ascending by date.
pub fn load_prices(path: impl AsRef<Path>) -> Result<PriceSeries, SeriesError> {
    let content = std::fs::read_to_string(path)?;
    parse_prices(&content)
}

/// Parse a price series from JSON text
pub fn parse_prices(content: &str) -> Result<PriceSeries, SeriesError> {
    let mut points: Vec<PricePoint> = serde_json::from_str(content)?;
    points.sort_by_key(|p| p.date);

    for pair in points.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(SeriesError::DuplicateDate(pair[0].date));
        }
    }
    if let Some(bad) = points.iter().find(|p| p.close <= Decimal::ZERO) {
        return Err(SeriesError::NonPositiveClose(bad.date, bad.close));
    }

    tracing::debug!(
        observations = points.len(),
        first = ?points.first().map(|p| p.date),
        last = ?points.last().map(|p| p.date),
        "loaded price series"
    );
    Ok(PriceSeries::new(points))
}
