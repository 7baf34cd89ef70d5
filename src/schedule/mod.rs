//! Payout schedule generation
//!
//! For each requested year: derive the baseline from the trailing lookback
//! window ending at January 1st, resolve the band, then emit one adjusted
//! payout per month from February through the following January. The
//! one-month lag keeps every baseline strictly ahead of its payout window.

mod types;

pub use types::{PayoutParams, PayoutRecord};

use chrono::{Datelike, NaiveDate};

use crate::band;
use crate::baseline::lookback_average;
use crate::resolve::price_on_or_after;
use crate::series::PriceSeries;
use crate::summary::{summarize, YearSummary};

/// Generate adjusted payout records for the given years
///
/// Years with insufficient lookback history contribute no records; months
/// whose payout date cannot be resolved are skipped individually. The
/// result is sorted ascending by payout date so unsorted or overlapping
/// `years` input still interleaves correctly.
pub fn generate_payouts(
    series: &PriceSeries,
    params: &PayoutParams,
    years: &[i32],
) -> Vec<PayoutRecord> {
    let mut records = Vec::with_capacity(years.len() * 12);
    for &year in years {
        generate_year(series, params, year, &mut records);
    }
    records.sort_by_key(|r| r.payout_date);
    records
}

/// Full pipeline: payout records plus per-year summaries
///
/// Stateless; callers re-run it wholesale whenever inputs change.
pub fn compute(
    series: &PriceSeries,
    params: &PayoutParams,
    years: &[i32],
) -> (Vec<PayoutRecord>, Vec<YearSummary>) {
    let records = generate_payouts(series, params, years);
    let summaries = summarize(&records);
    (records, summaries)
}

fn generate_year(
    series: &PriceSeries,
    params: &PayoutParams,
    year: i32,
    records: &mut Vec<PayoutRecord>,
) {
    let reference = match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d,
        None => return,
    };
    let baseline = match lookback_average(series, reference, params.lookback) {
        Some(b) => b,
        None => {
            tracing::debug!(year, "insufficient lookback history, skipping year");
            return;
        }
    };
    let band = params.band.resolve(baseline);
    let fixed_tokens = params.monthly_usd_target / baseline;

    // Months 2..=13: February of `year` through January of `year + 1`.
    for month in 2..=13u32 {
        let (payout_year, payout_month) = if month == 13 {
            (year + 1, 1)
        } else {
            (year, month)
        };
        let payout_date = match NaiveDate::from_ymd_opt(payout_year, payout_month, 1) {
            Some(d) => d,
            None => continue,
        };
        let point = match price_on_or_after(series, payout_date) {
            Some(p) => p,
            None => {
                tracing::debug!(%payout_date, "no observation at or after payout date, skipping month");
                continue;
            }
        };
        if (point.date.year(), point.date.month()) != (payout_year, payout_month) {
            // Forward-only resolution crossed a month boundary; this shifts
            // the payout economics onto the next month's prices. Surfaced
            // rather than corrected.
            tracing::warn!(
                %payout_date,
                observed = %point.date,
                "payout priced off an observation outside its month"
            );
        }

        let adjustment = band::adjust(
            point.close,
            &band,
            fixed_tokens,
            params.monthly_usd_target,
        );
        records.push(PayoutRecord {
            year,
            payout_date,
            baseline,
            floor_price: band.floor_price,
            ceiling_price: band.ceiling_price,
            fixed_tokens,
            effective_tokens: adjustment.effective_tokens,
            price_at_payout: point.close,
            nominal_usd: fixed_tokens * point.close,
            effective_usd: adjustment.effective_usd,
            status: adjustment.status,
            token_delta: adjustment.effective_tokens - fixed_tokens,
        });
    }
}
