//! Unit tests for bar models

use crate::support::bars_from_closes;
use goldsignal::indicators::IndicatorError;
use goldsignal::models::indicators::{validate_bars, Bar, BarSeries};

#[test]
fn test_bar_check_accepts_valid_bar() {
    assert!(Bar::new(0, 2045.0, 2047.0, 2043.0, 2046.0).check().is_ok());
    // doji with no wicks
    assert!(Bar::new(0, 1.0, 1.0, 1.0, 1.0).check().is_ok());
}

#[test]
fn test_bar_check_rejects_broken_ordering() {
    assert!(Bar::new(0, 2045.0, 2044.0, 2043.0, 2046.0).check().is_err());
    assert!(Bar::new(0, 2045.0, 2047.0, 2045.5, 2046.0).check().is_err());
    assert!(Bar::new(0, f64::NAN, 2047.0, 2043.0, 2046.0).check().is_err());
}

#[test]
fn test_validate_bars_requires_increasing_time() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    assert!(validate_bars(&bars).is_ok());

    bars[2].time = bars[1].time;
    match validate_bars(&bars) {
        Err(IndicatorError::InvalidBar { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected invalid bar, got {:?}", other),
    }
}

#[test]
fn test_validate_bars_reports_index() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    bars[1].high = 0.0;
    assert!(matches!(
        validate_bars(&bars),
        Err(IndicatorError::InvalidBar { index: 1, .. })
    ));
}

#[test]
fn test_bar_series_columns() {
    let bars = bars_from_closes(&[1.0, 2.0]);
    let series = BarSeries::from(bars.as_slice());
    assert_eq!(series.len(), 2);
    assert_eq!(series.closes, vec![1.0, 2.0]);
    assert_eq!(series.highs, vec![1.5, 2.5]);
    assert_eq!(series.lows, vec![0.5, 0.5]);
    assert_eq!(series.last_close(), Some(2.0));
    assert!(BarSeries::default().is_empty());
}

#[test]
fn test_bar_json_shape() {
    let bar: Bar = serde_json::from_str(
        r#"{"time": 1700000000, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5}"#,
    )
    .unwrap();
    assert_eq!(bar, Bar::new(1_700_000_000, 1.0, 2.0, 0.5, 1.5));
}
