//! EMA (Exponential Moving Average) trend indicators

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period_pair;
use crate::models::indicators::Bar;
use crate::models::signal::{SignalBias, SignalLabel, SubSignal};

pub const DEFAULT_SHORT_PERIOD: usize = 20;
pub const DEFAULT_LONG_PERIOD: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossSettings {
    pub short: usize,
    pub long: usize,
}

impl Default for CrossSettings {
    fn default() -> Self {
        Self {
            short: DEFAULT_SHORT_PERIOD,
            long: DEFAULT_LONG_PERIOD,
        }
    }
}

/// Latest EMA value for a specific period
pub fn calculate_ema(closes: &[f64], period: usize) -> Result<Option<f64>, IndicatorError> {
    Ok(math::ema(closes, period)?.last().copied())
}

/// EMA series paired with the time of the bar each value belongs to.
pub fn ema_points(bars: &[Bar], period: usize) -> Result<Vec<(i64, f64)>, IndicatorError> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let offset = math::warmup_offset(period);
    Ok(math::ema(&closes, period)?
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| bars.get(i + offset).map(|bar| (bar.time, value)))
        .collect())
}

/// Check the short/long EMA pair for a cross on the latest bar.
///
/// A fresh cross outranks the ongoing trend. Fewer than `long + 2` closes
/// gives the unavailable placeholder. The numeric value is the latest
/// short-minus-long spread.
pub fn ema_cross(
    closes: &[f64],
    short_period: usize,
    long_period: usize,
) -> Result<SubSignal, IndicatorError> {
    validate_period_pair("ema cross", short_period, long_period)?;
    if long_period
        .checked_add(2)
        .map_or(true, |needed| closes.len() < needed)
    {
        return Ok(SubSignal::unavailable());
    }

    let short_ema = math::ema(closes, short_period)?;
    let long_ema = math::ema(closes, long_period)?;

    let (Some(cur_short), Some(prev_short)) = tail_pair(&short_ema) else {
        return Ok(SubSignal::unavailable());
    };
    let (Some(cur_long), Some(prev_long)) = tail_pair(&long_ema) else {
        return Ok(SubSignal::unavailable());
    };

    let (bias, label) = if cur_short > cur_long && prev_short <= prev_long {
        (SignalBias::Bullish, SignalLabel::UptrendReversal)
    } else if cur_short < cur_long && prev_short >= prev_long {
        (SignalBias::Bearish, SignalLabel::DowntrendReversal)
    } else if cur_short > cur_long {
        (SignalBias::Bullish, SignalLabel::Uptrend)
    } else if cur_short < cur_long {
        (SignalBias::Bearish, SignalLabel::Downtrend)
    } else {
        (SignalBias::Neutral, SignalLabel::Flat)
    };

    Ok(SubSignal::new(bias, label, Some(cur_short - cur_long)))
}

/// EMA cross with default periods (20, 50)
pub fn ema_cross_default(closes: &[f64]) -> Result<SubSignal, IndicatorError> {
    ema_cross(closes, DEFAULT_SHORT_PERIOD, DEFAULT_LONG_PERIOD)
}

fn tail_pair(series: &[f64]) -> (Option<f64>, Option<f64>) {
    let n = series.len();
    (
        series.last().copied(),
        n.checked_sub(2).and_then(|i| series.get(i).copied()),
    )
}
