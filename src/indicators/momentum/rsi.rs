//! RSI (Relative Strength Index) indicator

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period;
use crate::models::signal::{SignalBias, SignalLabel, SubSignal};

pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_STRONG: f64 = 60.0;
pub const RSI_WEAK: f64 = 40.0;

/// RS used when the average loss is exactly zero. Caps RSI at 100 - 100/101 (~99.01), not 100.
pub const ZERO_LOSS_RS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiSettings {
    pub period: usize,
    pub overbought: f64,
    pub oversold: f64,
    pub strong: f64,
    pub weak: f64,
}

impl Default for RsiSettings {
    fn default() -> Self {
        Self {
            period: DEFAULT_RSI_PERIOD,
            overbought: RSI_OVERBOUGHT,
            oversold: RSI_OVERSOLD,
            strong: RSI_STRONG,
            weak: RSI_WEAK,
        }
    }
}

/// Calculate the latest RSI value with Wilder smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first `period` differences seed the averages; every later difference
/// is folded in as `(avg * (period - 1) + x) / period`. Needs
/// `period + 1` closes, otherwise `Ok(None)`.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<Option<f64>, IndicatorError> {
    validate_period("rsi", period)?;
    if closes.len() <= period {
        return Ok(None);
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let n = period as f64;

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &change in &changes[..period] {
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= n;
    avg_loss /= n;

    for &change in &changes[period..] {
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (avg_gain * (n - 1.0) + gain) / n;
        avg_loss = (avg_loss * (n - 1.0) + loss) / n;
    }

    let rs = if avg_loss == 0.0 {
        ZERO_LOSS_RS
    } else {
        avg_gain / avg_loss
    };

    Ok(Some(100.0 - (100.0 / (1.0 + rs))))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Result<Option<f64>, IndicatorError> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}

/// Overbought reads bearish, oversold bullish. The strong/weak bands only change the label.
pub fn rsi_signal(rsi: Option<f64>, settings: &RsiSettings) -> SubSignal {
    let Some(value) = rsi else {
        return SubSignal::unavailable();
    };

    let (bias, label) = if value >= settings.overbought {
        (SignalBias::Bearish, SignalLabel::Overbought)
    } else if value <= settings.oversold {
        (SignalBias::Bullish, SignalLabel::Oversold)
    } else if value >= settings.strong {
        (SignalBias::Neutral, SignalLabel::Strong)
    } else if value <= settings.weak {
        (SignalBias::Neutral, SignalLabel::Weak)
    } else {
        (SignalBias::Neutral, SignalLabel::Neutral)
    };

    SubSignal::new(bias, label, Some(value))
}
