//! Floor/ceiling band and payout adjustment
//!
//! The band can be given as multipliers of the yearly baseline or as
//! absolute prices. Either way it resolves to a [`PriceBand`] carrying both
//! the absolute bounds and the baseline-relative factors, so the effective
//! repricing rule is a single code path: a breach reprices the payout to
//! `monthly_usd_target * factor` dollars at the observed price.

use rust_decimal::Decimal;
use serde::Serialize;

/// Band configuration, one of two mutually exclusive modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandMode {
    /// Bounds as multipliers of the baseline; floor < 1 < ceiling
    Percent { floor: Decimal, ceiling: Decimal },
    /// Bounds as absolute prices; floor < ceiling
    Absolute { floor: Decimal, ceiling: Decimal },
}

/// A band resolved against a concrete baseline price
#[derive(Debug, Clone, Copy)]
pub struct PriceBand {
    /// Lower bound price
    pub floor_price: Decimal,
    /// Upper bound price
    pub ceiling_price: Decimal,
    /// floor_price / baseline
    pub floor_factor: Decimal,
    /// ceiling_price / baseline
    pub ceiling_factor: Decimal,
}

impl BandMode {
    /// Resolve the band against a year's baseline price
    ///
    /// Requires `baseline > 0` (guaranteed upstream: baselines are means of
    /// positive closes).
    pub fn resolve(&self, baseline: Decimal) -> PriceBand {
        match *self {
            BandMode::Percent { floor, ceiling } => PriceBand {
                floor_price: baseline * floor,
                ceiling_price: baseline * ceiling,
                floor_factor: floor,
                ceiling_factor: ceiling,
            },
            BandMode::Absolute { floor, ceiling } => PriceBand {
                floor_price: floor,
                ceiling_price: ceiling,
                floor_factor: floor / baseline,
                ceiling_factor: ceiling / baseline,
            },
        }
    }
}

/// Outcome classification for a single payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayoutStatus {
    /// Price fell below the floor; payout topped up to the floor value
    FloorHit,
    /// Price rose above the ceiling; payout capped at the ceiling value
    CeilingHit,
    /// Price inside the band; fixed token amount paid as-is
    Normal,
}

/// Result of adjusting one payout against the band
#[derive(Debug, Clone, Copy)]
pub struct Adjustment {
    pub status: PayoutStatus,
    /// Token amount actually paid
    pub effective_tokens: Decimal,
    /// USD value of the adjusted payout at the observed price
    pub effective_usd: Decimal,
}

/// Adjust a payout against the band
///
/// Breaches are strict comparisons; at most one bound can be hit since
/// `floor_price < ceiling_price`. Requires `price_at_payout > 0`.
pub fn adjust(
    price_at_payout: Decimal,
    band: &PriceBand,
    fixed_tokens: Decimal,
    monthly_usd_target: Decimal,
) -> Adjustment {
    if price_at_payout < band.floor_price {
        let effective_usd = monthly_usd_target * band.floor_factor;
        Adjustment {
            status: PayoutStatus::FloorHit,
            effective_tokens: effective_usd / price_at_payout,
            effective_usd,
        }
    } else if price_at_payout > band.ceiling_price {
        let effective_usd = monthly_usd_target * band.ceiling_factor;
        Adjustment {
            status: PayoutStatus::CeilingHit,
            effective_tokens: effective_usd / price_at_payout,
            effective_usd,
        }
    } else {
        Adjustment {
            status: PayoutStatus::Normal,
            effective_tokens: fixed_tokens,
            effective_usd: fixed_tokens * price_at_payout,
        }
    }
}
