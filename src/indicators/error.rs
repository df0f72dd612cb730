//! Indicator error types.
//!
//! Running short of history is *not* an error anywhere in the engine; it
//! surfaces as an empty series or a `None`. These variants are reserved for
//! caller bugs that no amount of waiting for new bars will fix.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// Period of zero.
    #[error("invalid {name} period: {value}")]
    InvalidPeriod { name: &'static str, value: usize },

    /// A fast/short period that is not strictly below its slow/long counterpart.
    #[error("{name}: fast period {fast} must be below slow period {slow}")]
    PeriodOrder {
        name: &'static str,
        fast: usize,
        slow: usize,
    },

    /// High/low/close columns of different lengths.
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// NaN or infinite price in the input.
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    /// A bar that breaks the OHLC ordering or time ordering invariant.
    #[error("invalid bar at index {index}: {reason}")]
    InvalidBar { index: usize, reason: String },
}

impl IndicatorError {
    pub fn invalid_bar(index: usize, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidBar {
            index,
            reason: reason.into(),
        }
    }
}
