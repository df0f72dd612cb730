//! Unit tests for signal history

use chrono::{TimeZone, Utc};
use goldsignal::history::{HistoryError, SignalHistory, TradeOutcome, DEFAULT_HISTORY_LIMIT};
use goldsignal::models::signal::{Locale, OverallSignal};
use goldsignal::services::market_data::Timeframe;
use goldsignal::signals::decision::risk_plan;

fn record(history: &mut SignalHistory, signal: OverallSignal, price: f64) -> u64 {
    let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    history
        .record(signal, price, Timeframe::FifteenMin, None, time)
        .unwrap()
}

#[test]
fn test_history_newest_first() {
    let mut history = SignalHistory::default();
    let first = record(&mut history, OverallSignal::Buy, 2045.0);
    let second = record(&mut history, OverallSignal::Sell, 2050.0);

    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].id, second);
    assert_eq!(history.entries()[1].id, first);
    assert!(second > first);
    assert_eq!(history.entries()[0].result, TradeOutcome::Pending);
}

#[test]
fn test_history_caps_length() {
    let mut history = SignalHistory::new(3);
    for i in 0..5 {
        record(&mut history, OverallSignal::Buy, 2000.0 + i as f64);
    }
    assert_eq!(history.len(), 3);
    let prices: Vec<f64> = history.entries().iter().map(|e| e.price).collect();
    assert_eq!(prices, vec![2004.0, 2003.0, 2002.0]);
    assert_eq!(SignalHistory::default().limit(), DEFAULT_HISTORY_LIMIT);
}

#[test]
fn test_history_rejects_neutral() {
    let mut history = SignalHistory::default();
    let result = history.record(
        OverallSignal::Neutral,
        2045.0,
        Timeframe::OneHour,
        None,
        Utc::now(),
    );
    assert!(matches!(result, Err(HistoryError::NotActionable(_))));
    assert!(history.is_empty());
}

#[test]
fn test_toggle_result_cycles() {
    let mut history = SignalHistory::default();
    let id = record(&mut history, OverallSignal::Buy, 2045.0);

    assert_eq!(history.toggle_result(id).unwrap(), TradeOutcome::Win);
    assert_eq!(history.toggle_result(id).unwrap(), TradeOutcome::Loss);
    assert_eq!(history.toggle_result(id).unwrap(), TradeOutcome::Pending);
    assert!(matches!(
        history.toggle_result(id + 1),
        Err(HistoryError::UnknownEntry(_))
    ));
}

#[test]
fn test_record_counts_and_clear() {
    let mut history = SignalHistory::default();
    let a = record(&mut history, OverallSignal::Buy, 1.0);
    let b = record(&mut history, OverallSignal::Sell, 2.0);
    record(&mut history, OverallSignal::Buy, 3.0);
    history.toggle_result(a).unwrap();
    history.toggle_result(b).unwrap();
    history.toggle_result(b).unwrap();

    assert_eq!(history.record_counts(), (1, 1));
    history.clear();
    assert!(history.is_empty());
}

#[test]
fn test_history_json_round_trip_keeps_ids_moving() {
    let mut history = SignalHistory::new(10);
    let plan = risk_plan(2045.0, Some(2.0), true, 2.0);
    let id = history
        .record(
            OverallSignal::Buy,
            2045.0,
            Timeframe::FifteenMin,
            plan,
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        )
        .unwrap();
    history.toggle_result(id).unwrap();

    let json = history.to_json().unwrap();
    let mut restored = SignalHistory::from_json(&json).unwrap();
    assert_eq!(restored, history);
    assert_eq!(restored.get(id).unwrap().plan, plan);

    let next = record(&mut restored, OverallSignal::Sell, 2050.0);
    assert!(next > id);
}

#[test]
fn test_history_from_json_invalid() {
    assert!(matches!(
        SignalHistory::from_json("not json"),
        Err(HistoryError::Serialization(_))
    ));
}

#[test]
fn test_outcome_labels() {
    assert_eq!(TradeOutcome::Win.text(Locale::Ja), "勝ち");
    assert_eq!(TradeOutcome::Pending.text(Locale::En), "Pending");
}
