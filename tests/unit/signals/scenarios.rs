//! Market scenarios run through the full engine

use crate::support::{
    assert_close, bars_from_closes, buy_scenario, closes_from_segments, columns, sell_scenario,
};
use goldsignal::models::signal::{OverallSignal, SignalBias, SignalLabel};
use goldsignal::indicators::momentum::MacdSettings;
use goldsignal::indicators::trend::CrossSettings;
use goldsignal::signals::engine::{generate_signal, EngineSettings, SignalEngine};
use goldsignal::AggregateSignal;

fn run(closes: &[f64]) -> AggregateSignal {
    let bars = bars_from_closes(closes);
    let (closes, highs, lows) = columns(&bars);
    generate_signal(&closes, &highs, &lows).unwrap()
}

#[test]
fn test_capitulation_outvotes_oversold_rsi() {
    let signal = run(&sell_scenario());

    assert_eq!(signal.components.rsi.signal, SignalBias::Bullish);
    assert_eq!(signal.components.rsi.label, SignalLabel::Oversold);
    assert_close(signal.components.rsi.numeric_value.unwrap(), 15.413246590340364);
    assert_eq!(signal.components.macd.label, SignalLabel::BearishContinuation);
    assert_eq!(signal.components.ema.label, SignalLabel::Downtrend);

    assert_eq!((signal.buy_score, signal.sell_score), (2, 3));
    assert_eq!(signal.overall, OverallSignal::Sell);
    assert_close(signal.atr.unwrap(), 2.0173931029138052);
}

#[test]
fn test_blow_off_rally_outvotes_overbought_rsi() {
    let signal = run(&buy_scenario());

    assert_eq!(signal.components.rsi.label, SignalLabel::Overbought);
    assert_eq!(signal.components.macd.label, SignalLabel::BullishContinuation);
    assert_eq!(signal.components.ema.label, SignalLabel::Uptrend);
    assert_eq!((signal.buy_score, signal.sell_score), (3, 2));
    assert_eq!(signal.overall, OverallSignal::Buy);
}

#[test]
fn test_breakdown_from_range() {
    let signal = run(&closes_from_segments(&[(40, 0.0), (20, -1.0), (4, -0.25)]));
    assert_eq!(signal.components.rsi.numeric_value, Some(0.0));
    assert_eq!((signal.buy_score, signal.sell_score), (2, 3));
    assert_eq!(signal.overall, OverallSignal::Sell);
}

#[test]
fn test_breakout_from_range() {
    let signal = run(&closes_from_segments(&[(40, 0.0), (20, 1.0), (4, 0.25)]));
    assert_eq!((signal.buy_score, signal.sell_score), (3, 2));
    assert_eq!(signal.overall, OverallSignal::Buy);
}

#[test]
fn test_scores_are_bounded() {
    for closes in [sell_scenario(), buy_scenario()] {
        let signal = run(&closes);
        assert!(signal.buy_score <= 5 && signal.sell_score <= 5);
        assert!(signal.buy_score + signal.sell_score <= 5);
    }
}

#[test]
fn test_bounce_in_oversold_market_scores_full_buy() {
    // fast MACD and cross periods turn on the first up bar while RSI 14 stays oversold
    let settings = EngineSettings {
        macd: MacdSettings {
            fast: 2,
            slow: 4,
            signal: 2,
        },
        cross: CrossSettings { short: 2, long: 3 },
        ..EngineSettings::default()
    };
    let closes = closes_from_segments(&[(39, -1.0), (1, 2.5)]);
    let bars = bars_from_closes(&closes);
    let (closes, highs, lows) = columns(&bars);
    let signal = SignalEngine::new(settings)
        .generate_signal(&closes, &highs, &lows)
        .unwrap();

    assert_eq!(signal.components.rsi.label, SignalLabel::Oversold);
    assert_close(signal.components.rsi.numeric_value.unwrap(), 16.129032258064512);
    assert_eq!(signal.components.macd.signal, SignalBias::Bullish);
    assert_eq!(signal.components.ema.label, SignalLabel::UptrendReversal);
    assert_eq!((signal.buy_score, signal.sell_score), (5, 0));
    assert_eq!(signal.overall, OverallSignal::Buy);
}
