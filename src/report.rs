//! Plain-text report rendering for CLI output

use std::fmt::Write;

use crate::band::PayoutStatus;
use crate::schedule::PayoutRecord;
use crate::summary::YearSummary;

fn status_label(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::FloorHit => "FLOOR",
        PayoutStatus::CeilingHit => "CEILING",
        PayoutStatus::Normal => "normal",
    }
}

/// Format payout records as a table for CLI output
pub fn format_records_table(records: &[PayoutRecord]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>12} {:>12} {:>12} {:>10}  {}",
        "DATE", "PRICE", "BASELINE", "FIXED", "EFFECTIVE", "USD VALUE", "DELTA", "STATUS"
    )
    .ok();
    writeln!(out, "{}", "─".repeat(92)).ok();
    for r in records {
        writeln!(
            out,
            "{:<12} {:>10.4} {:>10.4} {:>12.2} {:>12.2} {:>12.2} {:>+10.2}  {}",
            r.payout_date.to_string(),
            r.price_at_payout,
            r.baseline,
            r.fixed_tokens,
            r.effective_tokens,
            r.effective_usd,
            r.token_delta,
            status_label(r.status),
        )
        .ok();
    }
    out
}

/// Format one year summary as a block for CLI output
pub fn format_summary_block(summary: &YearSummary) -> String {
    format!(
        r#"
══════════════════════════════════════════════════════
               YEAR {}
══════════════════════════════════════════════════════

BASELINE
───────────────────────────────────────────────────────
Baseline Price:   {:.4}
Band:             [{:.4}, {:.4}]
Fixed Tokens/mo:  {:.2}

PAYOUTS
───────────────────────────────────────────────────────
Months Paid:      {} ({} floor, {} ceiling, {} normal)
Tokens Paid:      {:.2}
If Unadjusted:    {:.2}
Added by Floor:   {:.2}
Saved by Ceiling: {:.2}
Avg USD Value:    {:.2}
══════════════════════════════════════════════════════
"#,
        summary.year,
        summary.baseline,
        summary.floor_price,
        summary.ceiling_price,
        summary.fixed_tokens,
        summary.months,
        summary.floor_hits,
        summary.ceiling_hits,
        summary.normal_months,
        summary.total_effective_tokens,
        summary.total_fixed_tokens,
        summary.tokens_added_by_floor,
        summary.tokens_saved_by_ceiling,
        summary.avg_effective_usd,
    )
}

/// Format all year summaries for CLI output
pub fn format_summary_table(summaries: &[YearSummary]) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{:<6} {:>10} {:>8} {:>6} {:>8} {:>14} {:>14} {:>12}",
        "YEAR", "BASELINE", "MONTHS", "FLOOR", "CEILING", "TOKENS PAID", "UNADJUSTED", "AVG USD"
    )
    .ok();
    writeln!(out, "{}", "─".repeat(84)).ok();
    for s in summaries {
        writeln!(
            out,
            "{:<6} {:>10.4} {:>8} {:>6} {:>8} {:>14.2} {:>14.2} {:>12.2}",
            s.year,
            s.baseline,
            s.months,
            s.floor_hits,
            s.ceiling_hits,
            s.total_effective_tokens,
            s.total_fixed_tokens,
            s.avg_effective_usd,
        )
        .ok();
    }
    out
}
