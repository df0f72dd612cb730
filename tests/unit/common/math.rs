//! Unit tests for moving-average primitives

use goldsignal::common::math::{
    ema, ema_from_previous, ema_multiplier, mean, sma, true_range, warmup_offset,
};
use goldsignal::indicators::IndicatorError;

#[test]
fn test_mean_of_empty_slice_is_zero() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(mean(&[2.0, 4.0]), 3.0);
}

#[test]
fn test_ema_seeded_with_simple_average() {
    let values = ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
    assert_eq!(values, vec![2.0, 3.0, 4.0]);
}

#[test]
fn test_ema_output_aligned_to_input_end() {
    let series: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let values = ema(&series, 10).unwrap();
    assert_eq!(values.len(), series.len() - warmup_offset(10));
}

#[test]
fn test_ema_short_input_is_empty() {
    assert!(ema(&[1.0, 2.0], 3).unwrap().is_empty());
    assert!(ema(&[], 3).unwrap().is_empty());
}

#[test]
fn test_ema_exact_period_yields_single_seed() {
    let values = ema(&[2.0, 4.0, 6.0], 3).unwrap();
    assert_eq!(values, vec![4.0]);
}

#[test]
fn test_ema_rejects_zero_period() {
    assert_eq!(
        ema(&[1.0], 0),
        Err(IndicatorError::InvalidPeriod {
            name: "ema",
            value: 0
        })
    );
}

#[test]
fn test_ema_step_uses_multiplier() {
    assert_eq!(ema_multiplier(3), 0.5);
    assert_eq!(ema_from_previous(10.0, 6.0, 3), 8.0);
}

#[test]
fn test_sma_sliding_window() {
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap(), vec![2.0, 3.0, 4.0]);
    assert!(sma(&[1.0], 2).unwrap().is_empty());
    assert!(sma(&[1.0], 0).is_err());
}

#[test]
fn test_true_range_uses_gap_from_previous_close() {
    assert_eq!(true_range(12.0, 10.0, 11.0), 2.0);
    // gap up
    assert_eq!(true_range(15.0, 14.0, 11.0), 4.0);
    // gap down
    assert_eq!(true_range(9.0, 8.0, 11.0), 3.0);
}
