//! Unit tests for RSI indicator

use crate::support::assert_close;
use goldsignal::indicators::momentum::{calculate_rsi, calculate_rsi_default, rsi_signal, RsiSettings};
use goldsignal::models::signal::{SignalBias, SignalLabel};

const WILDER: [f64; 20] = [
    44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
    46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
];

#[test]
fn test_rsi_insufficient_data() {
    assert_eq!(calculate_rsi_default(&WILDER[..14]).unwrap(), None);
    assert_eq!(calculate_rsi_default(&[]).unwrap(), None);
}

#[test]
fn test_rsi_at_minimum_length_uses_seed() {
    let rsi = calculate_rsi_default(&WILDER[..15]).unwrap().unwrap();
    assert_close(rsi, 70.46413502109705);
}

#[test]
fn test_rsi_wilder_smoothing() {
    let rsi = calculate_rsi_default(&WILDER).unwrap().unwrap();
    assert_close(rsi, 57.91502067008556);
}

#[test]
fn test_rsi_all_gains_saturates_below_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi_default(&closes).unwrap().unwrap();
    assert_close(rsi, 100.0 - 100.0 / 101.0);
}

#[test]
fn test_rsi_flat_series_saturates() {
    let closes = vec![50.0; 20];
    let rsi = calculate_rsi_default(&closes).unwrap().unwrap();
    assert_close(rsi, 99.00990099009901);
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    assert_eq!(calculate_rsi_default(&closes).unwrap(), Some(0.0));
}

#[test]
fn test_rsi_zero_period_rejected() {
    assert!(calculate_rsi(&WILDER, 0).is_err());
}

#[test]
fn test_rsi_signal_bands() {
    let settings = RsiSettings::default();
    let cases = [
        (75.0, SignalBias::Bearish, SignalLabel::Overbought),
        (70.0, SignalBias::Bearish, SignalLabel::Overbought),
        (25.0, SignalBias::Bullish, SignalLabel::Oversold),
        (30.0, SignalBias::Bullish, SignalLabel::Oversold),
        (65.0, SignalBias::Neutral, SignalLabel::Strong),
        (35.0, SignalBias::Neutral, SignalLabel::Weak),
        (50.0, SignalBias::Neutral, SignalLabel::Neutral),
    ];
    for (value, bias, label) in cases {
        let sub = rsi_signal(Some(value), &settings);
        assert_eq!(sub.signal, bias, "rsi {}", value);
        assert_eq!(sub.label, label, "rsi {}", value);
        assert_eq!(sub.numeric_value, Some(value));
    }
}

#[test]
fn test_rsi_signal_unavailable() {
    let sub = rsi_signal(None, &RsiSettings::default());
    assert_eq!(sub.signal, SignalBias::Neutral);
    assert_eq!(sub.label, SignalLabel::Unavailable);
    assert_eq!(sub.numeric_value, None);
}

#[test]
fn test_rsi_period_longer_than_any_input() {
    assert_eq!(calculate_rsi(&[1.0; 30], usize::MAX).unwrap(), None);
    assert_eq!(calculate_rsi(&WILDER, WILDER.len()).unwrap(), None);
}
