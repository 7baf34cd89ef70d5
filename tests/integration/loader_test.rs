//! Price history loading from disk

use std::io::Write;

use payband::series::{load_prices, SeriesError};
use rust_decimal_macros::dec;

#[test]
fn test_load_prices_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"date": "2022-01-04", "close": 10.75}},
            {{"date": "2022-01-03", "close": 10.5}},
            {{"date": "2022-01-07", "close": "9.90"}}
        ]"#
    )
    .unwrap();

    let series = load_prices(file.path()).unwrap();
    assert_eq!(series.len(), 3);
    // Sorted on load regardless of file order.
    assert_eq!(series.points()[0].close, dec!(10.5));
    assert_eq!(series.points()[2].close, dec!(9.90));
}

#[test]
fn test_load_rejects_duplicate_dates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"date": "2022-01-03", "close": 10.5}},
            {{"date": "2022-01-03", "close": 10.6}}
        ]"#
    )
    .unwrap();

    assert!(matches!(
        load_prices(file.path()),
        Err(SeriesError::DuplicateDate(_))
    ));
}

#[test]
fn test_load_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(matches!(
        load_prices(file.path()),
        Err(SeriesError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        load_prices("/nonexistent/prices.json"),
        Err(SeriesError::Io(_))
    ));
}
