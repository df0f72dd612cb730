//! MACD (Moving Average Convergence Divergence) indicator

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_period, validate_period_pair};
use crate::models::indicators::MacdIndicator;
use crate::models::signal::{SignalBias, SignalLabel, SubSignal};

pub const DEFAULT_FAST_PERIOD: usize = 12;
pub const DEFAULT_SLOW_PERIOD: usize = 26;
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdSettings {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdSettings {
    fn default() -> Self {
        Self {
            fast: DEFAULT_FAST_PERIOD,
            slow: DEFAULT_SLOW_PERIOD,
            signal: DEFAULT_SIGNAL_PERIOD,
        }
    }
}

/// Subtract the slow EMA from the fast EMA point by point.
///
/// The fast series starts `offset = slow - fast` inputs earlier, so slow
/// index `i` pairs with fast index `i + offset`; both then refer to input
/// index `i + slow - 1`.
pub fn macd_line(fast_ema: &[f64], slow_ema: &[f64], offset: usize) -> Vec<f64> {
    slow_ema
        .iter()
        .enumerate()
        .filter_map(|(i, slow)| fast_ema.get(i + offset).map(|fast| fast - slow))
        .collect()
}

/// Histogram of a MACD line against its signal line.
///
/// Signal index `i` sits on MACD line index `i + signal_period - 1`.
pub fn histogram(macd_line: &[f64], signal_line: &[f64], signal_period: usize) -> Vec<f64> {
    let offset = math::warmup_offset(signal_period);
    signal_line
        .iter()
        .enumerate()
        .filter_map(|(i, signal)| macd_line.get(i + offset).map(|macd| macd - signal))
        .collect()
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of MACD
/// Histogram = MACD - Signal
///
/// `Ok(None)` below `slow` closes, or while the MACD line is still shorter
/// than `signal_period`.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<Option<MacdIndicator>, IndicatorError> {
    validate_period_pair("macd", fast_period, slow_period)?;
    validate_period("macd signal", signal_period)?;
    if closes.len() < slow_period {
        return Ok(None);
    }

    let fast_ema = math::ema(closes, fast_period)?;
    let slow_ema = math::ema(closes, slow_period)?;
    let line = macd_line(&fast_ema, &slow_ema, slow_period - fast_period);

    if line.len() < signal_period {
        return Ok(None);
    }

    let signal_line = math::ema(&line, signal_period)?;
    let hist = histogram(&line, &signal_line, signal_period);

    let (Some(&macd), Some(&signal), Some(&latest)) =
        (line.last(), signal_line.last(), hist.last())
    else {
        return Ok(None);
    };
    let previous_histogram = if hist.len() > 1 {
        hist[hist.len() - 2]
    } else {
        0.0
    };

    Ok(Some(MacdIndicator {
        macd,
        signal,
        histogram: latest,
        previous_histogram,
    }))
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> Result<Option<MacdIndicator>, IndicatorError> {
    calculate_macd(
        closes,
        DEFAULT_FAST_PERIOD,
        DEFAULT_SLOW_PERIOD,
        DEFAULT_SIGNAL_PERIOD,
    )
}

/// A histogram sign change outranks the plain sign of the histogram.
pub fn macd_signal(macd: Option<&MacdIndicator>) -> SubSignal {
    let Some(m) = macd else {
        return SubSignal::unavailable();
    };

    let (bias, label) = if m.histogram > 0.0 && m.previous_histogram <= 0.0 {
        (SignalBias::Bullish, SignalLabel::BuySign)
    } else if m.histogram < 0.0 && m.previous_histogram >= 0.0 {
        (SignalBias::Bearish, SignalLabel::SellSign)
    } else if m.histogram > 0.0 {
        (SignalBias::Bullish, SignalLabel::BullishContinuation)
    } else if m.histogram < 0.0 {
        (SignalBias::Bearish, SignalLabel::BearishContinuation)
    } else {
        (SignalBias::Neutral, SignalLabel::Neutral)
    };

    SubSignal::new(bias, label, Some(m.macd))
}
