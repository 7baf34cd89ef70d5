//! Payout schedule types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::band::{BandMode, PayoutStatus};
use crate::baseline::LookbackWindow;

/// Parameters for one calculation run
///
/// Immutable for the duration of a run and owned by the caller. The engine
/// does not re-validate the documented preconditions (positive target,
/// ordered band bounds); the configuration layer enforces them.
#[derive(Debug, Clone, Copy)]
pub struct PayoutParams {
    /// Target USD value of each monthly payout
    pub monthly_usd_target: Decimal,
    /// Floor/ceiling band configuration
    pub band: BandMode,
    /// Baseline lookback window
    pub lookback: LookbackWindow,
}

/// One monthly payout, fully adjusted
#[derive(Debug, Clone, Serialize)]
pub struct PayoutRecord {
    /// Calendar year the payout belongs to (the baseline year, not
    /// necessarily the payout date's year: January payouts trail)
    pub year: i32,
    /// Scheduled payout date (first of month)
    pub payout_date: NaiveDate,
    /// Trailing lookback average the year's band derives from
    pub baseline: Decimal,
    /// Lower band bound
    pub floor_price: Decimal,
    /// Upper band bound
    pub ceiling_price: Decimal,
    /// Token amount implied by the baseline, ignoring the band
    pub fixed_tokens: Decimal,
    /// Token amount actually paid after band adjustment
    pub effective_tokens: Decimal,
    /// Observed market price used for this payout
    pub price_at_payout: Decimal,
    /// fixed_tokens * price_at_payout
    pub nominal_usd: Decimal,
    /// USD value of the adjusted payout
    pub effective_usd: Decimal,
    /// Band outcome for this payout
    pub status: PayoutStatus,
    /// effective_tokens - fixed_tokens; positive on floor hits, negative
    /// on ceiling hits, zero otherwise
    pub token_delta: Decimal,
}
