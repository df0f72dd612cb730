//! Precondition checks shared by the indicators.

use crate::indicators::error::IndicatorError;

pub fn validate_period(name: &'static str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod {
            name,
            value: period,
        });
    }
    Ok(())
}

/// Both periods non-zero and `fast < slow`.
pub fn validate_period_pair(
    name: &'static str,
    fast: usize,
    slow: usize,
) -> Result<(), IndicatorError> {
    validate_period(name, fast)?;
    validate_period(name, slow)?;
    if fast >= slow {
        return Err(IndicatorError::PeriodOrder { name, fast, slow });
    }
    Ok(())
}

pub fn validate_finite(series: &[f64]) -> Result<(), IndicatorError> {
    match series.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(IndicatorError::NonFinite { index }),
        None => Ok(()),
    }
}

/// High, low and close columns must line up bar for bar.
pub fn validate_ohlc_lengths(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
) -> Result<(), IndicatorError> {
    let expected = highs.len();
    for actual in [lows.len(), closes.len()] {
        if actual != expected {
            return Err(IndicatorError::LengthMismatch { expected, actual });
        }
    }
    Ok(())
}
