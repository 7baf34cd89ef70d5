//! Per-year aggregation of payout records

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::band::PayoutStatus;
use crate::schedule::PayoutRecord;

/// Rollup of one year's payouts
///
/// Derived on demand from the full record set; baseline, band and fixed
/// tokens are year-invariant by construction, so they are taken from the
/// year's first record.
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub baseline: Decimal,
    pub floor_price: Decimal,
    pub ceiling_price: Decimal,
    pub fixed_tokens: Decimal,
    /// Number of payouts emitted for the year
    pub months: usize,
    pub floor_hits: usize,
    pub ceiling_hits: usize,
    pub normal_months: usize,
    /// Total tokens actually paid
    pub total_effective_tokens: Decimal,
    /// Total tokens had no adjustment applied
    pub total_fixed_tokens: Decimal,
    /// Tokens withheld by ceiling hits, always >= 0
    pub tokens_saved_by_ceiling: Decimal,
    /// Tokens topped up by floor hits, always >= 0
    pub tokens_added_by_floor: Decimal,
    /// Mean effective USD value across the year's payouts
    pub avg_effective_usd: Decimal,
}

/// Fold payout records into one summary per distinct year, ascending
pub fn summarize(records: &[PayoutRecord]) -> Vec<YearSummary> {
    let mut by_year: BTreeMap<i32, Vec<&PayoutRecord>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record);
    }

    by_year
        .into_iter()
        .map(|(year, records)| summarize_year(year, &records))
        .collect()
}

fn summarize_year(year: i32, records: &[&PayoutRecord]) -> YearSummary {
    let first = records[0];
    let mut summary = YearSummary {
        year,
        baseline: first.baseline,
        floor_price: first.floor_price,
        ceiling_price: first.ceiling_price,
        fixed_tokens: first.fixed_tokens,
        months: records.len(),
        floor_hits: 0,
        ceiling_hits: 0,
        normal_months: 0,
        total_effective_tokens: Decimal::ZERO,
        total_fixed_tokens: Decimal::ZERO,
        tokens_saved_by_ceiling: Decimal::ZERO,
        tokens_added_by_floor: Decimal::ZERO,
        avg_effective_usd: Decimal::ZERO,
    };

    let mut total_effective_usd = Decimal::ZERO;
    for record in records {
        summary.total_effective_tokens += record.effective_tokens;
        summary.total_fixed_tokens += record.fixed_tokens;
        total_effective_usd += record.effective_usd;
        match record.status {
            PayoutStatus::FloorHit => {
                summary.floor_hits += 1;
                summary.tokens_added_by_floor += record.effective_tokens - record.fixed_tokens;
            }
            PayoutStatus::CeilingHit => {
                summary.ceiling_hits += 1;
                summary.tokens_saved_by_ceiling += record.fixed_tokens - record.effective_tokens;
            }
            PayoutStatus::Normal => summary.normal_months += 1,
        }
    }
    summary.avg_effective_usd = total_effective_usd / Decimal::from(records.len() as u64);
    summary
}
