use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;

/// One OHLC price bar. `time` is epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// Checks `low <= min(open, close) <= max(open, close) <= high` and finiteness.
    pub fn check(&self) -> Result<(), String> {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite()) {
            return Err("non-finite price".to_string());
        }
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        if self.low > body_low {
            return Err(format!("low {} above body low {}", self.low, body_low));
        }
        if self.high < body_high {
            return Err(format!("high {} below body high {}", self.high, body_high));
        }
        Ok(())
    }
}

/// Validate every bar and that times strictly increase.
pub fn validate_bars(bars: &[Bar]) -> Result<(), IndicatorError> {
    for (index, bar) in bars.iter().enumerate() {
        bar.check()
            .map_err(|reason| IndicatorError::invalid_bar(index, reason))?;
        if index > 0 && bar.time <= bars[index - 1].time {
            return Err(IndicatorError::invalid_bar(
                index,
                format!(
                    "time {} not after previous bar time {}",
                    bar.time,
                    bars[index - 1].time
                ),
            ));
        }
    }
    Ok(())
}

/// Column view of a bar slice, the shape the indicators consume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub closes: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

impl From<&[Bar]> for BarSeries {
    fn from(bars: &[Bar]) -> Self {
        Self {
            closes: bars.iter().map(|b| b.close).collect(),
            highs: bars.iter().map(|b| b.high).collect(),
            lows: bars.iter().map(|b| b.low).collect(),
        }
    }
}

/// Latest MACD reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    /// Histogram one step before the latest, `0.0` when only one point exists.
    pub previous_histogram: f64,
}
