//! Daily price history
//!
//! Ordered (date, close) observations backing the payout calculation.
//! The series is pure data; lookups live in the `baseline` and `resolve`
//! modules.

mod loader;

pub use loader::{load_prices, SeriesError};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily closing price observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date (calendar day, no timezone)
    pub date: NaiveDate,
    /// Closing price in USD
    pub close: Decimal,
}

/// Ordered collection of daily price observations
///
/// Invariant: points are sorted ascending by date with no duplicate dates.
/// The loader establishes this at the boundary; constructors here trust it.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Wrap an already-sorted, duplicate-free list of observations
    pub fn new(points: Vec<PricePoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        Self { points }
    }

    /// All observations in date order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date of the earliest observation
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the latest observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}
