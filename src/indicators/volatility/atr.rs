//! ATR (Average True Range) indicator

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_ohlc_lengths, validate_period};
use crate::models::signal::Locale;

pub const DEFAULT_ATR_PERIOD: usize = 14;

/// ATR above this reads as a high-volatility market.
pub const HIGH_VOLATILITY_ATR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrSettings {
    pub period: usize,
    pub high_volatility: f64,
}

impl Default for AtrSettings {
    fn default() -> Self {
        Self {
            period: DEFAULT_ATR_PERIOD,
            high_volatility: HIGH_VOLATILITY_ATR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityRegime {
    High,
    Low,
}

impl VolatilityRegime {
    pub fn text(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, VolatilityRegime::High) => "高ボラ",
            (Locale::Ja, VolatilityRegime::Low) => "低ボラ",
            (Locale::En, VolatilityRegime::High) => "High volatility",
            (Locale::En, VolatilityRegime::Low) => "Low volatility",
        }
    }
}

/// Calculate ATR (Average True Range)
///
/// Seeded with the mean of the first `period` true ranges, then
/// Wilder-smoothed over the rest. Returns the final value only.
pub fn calculate_atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<Option<f64>, IndicatorError> {
    validate_ohlc_lengths(highs, lows, closes)?;
    validate_period("atr", period)?;
    if highs.len() <= period {
        return Ok(None);
    }

    let tr_values: Vec<f64> = (1..highs.len())
        .map(|i| math::true_range(highs[i], lows[i], closes[i - 1]))
        .collect();

    let n = period as f64;
    let mut atr = math::mean(&tr_values[..period]);
    for &tr in &tr_values[period..] {
        atr = (atr * (n - 1.0) + tr) / n;
    }

    Ok(Some(atr))
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
) -> Result<Option<f64>, IndicatorError> {
    calculate_atr(highs, lows, closes, DEFAULT_ATR_PERIOD)
}

pub fn volatility_regime(atr: f64, threshold: f64) -> VolatilityRegime {
    if atr > threshold {
        VolatilityRegime::High
    } else {
        VolatilityRegime::Low
    }
}
