//! End-to-end pipeline scenarios
//!
//! Exercises the full compute pipeline over synthetic price histories:
//! baseline derivation, band repricing, skip-by-omission, ordering, and
//! the year-summary accounting identity.

use chrono::{Duration, NaiveDate};
use payband::band::{BandMode, PayoutStatus};
use payband::baseline::LookbackWindow;
use payband::schedule::{compute, generate_payouts, PayoutParams};
use payband::series::{PricePoint, PriceSeries};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn flat(points: &mut Vec<PricePoint>, start: NaiveDate, end: NaiveDate, close: Decimal) {
    let mut date = start;
    while date <= end {
        points.push(PricePoint { date, close });
        date += Duration::days(1);
    }
}

fn percent_params() -> PayoutParams {
    PayoutParams {
        monthly_usd_target: dec!(7200),
        band: BandMode::Percent {
            floor: dec!(0.8),
            ceiling: dec!(1.7),
        },
        lookback: LookbackWindow::default(),
    }
}

#[test]
fn test_floor_hit_guarantees_usd_floor() {
    // ~200 days flat at $2.00 through January, then the payout month at $1.00.
    let mut points = Vec::new();
    flat(&mut points, day(2021, 7, 16), day(2022, 1, 31), dec!(2.00));
    flat(&mut points, day(2022, 2, 1), day(2022, 2, 28), dec!(1.00));
    let series = PriceSeries::new(points);

    let records = generate_payouts(&series, &percent_params(), &[2022]);
    assert_eq!(records.len(), 1); // only February is resolvable
    let feb = &records[0];
    assert_eq!(feb.baseline, dec!(2.00));
    assert_eq!(feb.floor_price, dec!(1.60));
    assert_eq!(feb.fixed_tokens, dec!(3600));
    assert_eq!(feb.status, PayoutStatus::FloorHit);
    assert_eq!(feb.effective_usd, dec!(5760));
    assert_eq!(feb.effective_tokens, dec!(5760));
}

#[test]
fn test_ceiling_hit_caps_usd_upside() {
    let mut points = Vec::new();
    flat(&mut points, day(2021, 7, 16), day(2022, 1, 31), dec!(2.00));
    flat(&mut points, day(2022, 2, 1), day(2022, 2, 28), dec!(5.00));
    let series = PriceSeries::new(points);

    let records = generate_payouts(&series, &percent_params(), &[2022]);
    let feb = &records[0];
    assert_eq!(feb.ceiling_price, dec!(3.40));
    assert_eq!(feb.status, PayoutStatus::CeilingHit);
    assert_eq!(feb.effective_usd, dec!(12240));
    assert_eq!(feb.effective_tokens, dec!(2448));
}

#[test]
fn test_thin_history_year_absent_everywhere() {
    // Ten observations before 2023-01-01 is under the 30-sample minimum.
    let mut points = Vec::new();
    flat(&mut points, day(2022, 12, 22), day(2023, 12, 31), dec!(2.00));
    let series = PriceSeries::new(points);

    let (records, summaries) = compute(&series, &percent_params(), &[2023]);
    assert!(records.is_empty());
    assert!(summaries.is_empty());
}

#[test]
fn test_records_sorted_across_overlapping_years() {
    let mut points = Vec::new();
    flat(&mut points, day(2021, 6, 1), day(2025, 1, 31), dec!(2.00));
    let series = PriceSeries::new(points);

    let years = [2023, 2022, 2023, 2024];
    let records = generate_payouts(&series, &percent_params(), &years);
    assert_eq!(records.len(), 48);
    assert!(records
        .windows(2)
        .all(|w| w[0].payout_date <= w[1].payout_date));
}

#[test]
fn test_mixed_year_properties_and_summary_identity() {
    // Baseline year at $2.00, then monthly regimes that hit the floor in
    // February/March, the ceiling in July, and stay inside otherwise.
    let mut points = Vec::new();
    flat(&mut points, day(2021, 6, 1), day(2022, 1, 31), dec!(2.00));
    flat(&mut points, day(2022, 2, 1), day(2022, 3, 31), dec!(1.20));
    flat(&mut points, day(2022, 4, 1), day(2022, 6, 30), dec!(2.40));
    flat(&mut points, day(2022, 7, 1), day(2022, 7, 31), dec!(4.00));
    flat(&mut points, day(2022, 8, 1), day(2023, 1, 31), dec!(2.00));
    let series = PriceSeries::new(points);

    let (records, summaries) = compute(&series, &percent_params(), &[2022]);
    assert_eq!(records.len(), 12);

    for record in &records {
        assert!(record.floor_price < record.ceiling_price);
        match record.status {
            PayoutStatus::FloorHit => {
                assert_eq!(record.effective_usd, dec!(7200) * dec!(0.8));
                assert!(record.token_delta > Decimal::ZERO);
            }
            PayoutStatus::CeilingHit => {
                assert_eq!(record.effective_usd, dec!(7200) * dec!(1.7));
                assert!(record.token_delta < Decimal::ZERO);
            }
            PayoutStatus::Normal => {
                assert_eq!(record.token_delta, Decimal::ZERO);
                assert_eq!(
                    record.effective_usd,
                    record.fixed_tokens * record.price_at_payout
                );
            }
        }
    }

    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.floor_hits, 2);
    assert_eq!(s.ceiling_hits, 1);
    assert_eq!(s.normal_months, 9);
    assert_eq!(
        s.total_effective_tokens,
        s.total_fixed_tokens + s.tokens_added_by_floor - s.tokens_saved_by_ceiling
    );
}

#[test]
fn test_absolute_band_mode_pipeline() {
    let mut points = Vec::new();
    flat(&mut points, day(2021, 6, 1), day(2022, 1, 31), dec!(2.00));
    flat(&mut points, day(2022, 2, 1), day(2022, 2, 28), dec!(1.00));
    let series = PriceSeries::new(points);

    let params = PayoutParams {
        monthly_usd_target: dec!(7200),
        band: BandMode::Absolute {
            floor: dec!(1.50),
            ceiling: dec!(4.00),
        },
        lookback: LookbackWindow::default(),
    };
    let records = generate_payouts(&series, &params, &[2022]);
    let feb = &records[0];
    assert_eq!(feb.floor_price, dec!(1.50));
    assert_eq!(feb.status, PayoutStatus::FloorHit);
    // Repriced with the baseline-implied factor 1.50 / 2.00.
    assert_eq!(feb.effective_usd, dec!(5400));
    assert_eq!(feb.effective_tokens, dec!(5400));
}

#[test]
fn test_month_gap_prices_off_next_observation() {
    // No observations at all in April; the April payout resolves forward
    // to the first May close rather than being dropped.
    let mut points = Vec::new();
    flat(&mut points, day(2021, 6, 1), day(2022, 3, 31), dec!(2.00));
    flat(&mut points, day(2022, 5, 1), day(2023, 1, 31), dec!(2.50));
    let series = PriceSeries::new(points);

    let records = generate_payouts(&series, &percent_params(), &[2022]);
    assert_eq!(records.len(), 12);
    let april = records
        .iter()
        .find(|r| r.payout_date == day(2022, 4, 1))
        .unwrap();
    assert_eq!(april.price_at_payout, dec!(2.50));
}

#[test]
fn test_records_serialize_to_json() {
    let mut points = Vec::new();
    flat(&mut points, day(2021, 6, 1), day(2022, 2, 28), dec!(2.00));
    let series = PriceSeries::new(points);

    let (records, summaries) = compute(&series, &percent_params(), &[2022]);
    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("\"payout_date\":\"2022-02-01\""));
    assert!(json.contains("\"status\":\"Normal\""));
    let json = serde_json::to_string(&summaries).unwrap();
    assert!(json.contains("\"year\":2022"));
}
