//! Moving averages and the true-range primitive.
//!
//! Series returned by [`ema`] and [`sma`] are aligned to the *end* of the
//! input: index `i` of the output corresponds to input index
//! `i + period - 1`. Callers translate between the two with [`warmup_offset`].

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_period;

/// Arithmetic mean of a slice, summed left to right. Returns 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Number of leading inputs consumed before a simple-seeded average emits its first value.
pub fn warmup_offset(period: usize) -> usize {
    period.saturating_sub(1)
}

/// EMA smoothing factor `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one price.
pub fn ema_from_previous(price: f64, previous: f64, period: usize) -> f64 {
    let k = ema_multiplier(period);
    price * k + previous * (1.0 - k)
}

/// Exponential moving average seeded with the mean of the first `period` values.
///
/// Output length is `series.len() - period + 1`; an input shorter than
/// `period` yields an empty vector rather than an error.
pub fn ema(series: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    validate_period("ema", period)?;
    if series.len() < period {
        return Ok(Vec::new());
    }

    let mut values = Vec::with_capacity(series.len() - period + 1);
    let mut current = mean(&series[..period]);
    values.push(current);

    for &price in &series[period..] {
        current = ema_from_previous(price, current, period);
        values.push(current);
    }

    Ok(values)
}

/// Sliding-window simple moving average.
pub fn sma(series: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    validate_period("sma", period)?;
    if series.len() < period {
        return Ok(Vec::new());
    }

    Ok(series.windows(period).map(mean).collect())
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, previous_close: f64) -> f64 {
    (high - low)
        .max((high - previous_close).abs())
        .max((low - previous_close).abs())
}
