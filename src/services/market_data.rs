//! Market data provider interface and the offline sources behind it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::{validate_bars, Bar};

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bars: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidBars(#[from] IndicatorError),
}

/// Bar interval the signal is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "15min")]
    FifteenMin,
    #[serde(rename = "1h")]
    OneHour,
}

impl Timeframe {
    /// Seconds covered by one bar.
    pub fn bar_seconds(self) -> i64 {
        match self {
            Timeframe::FifteenMin => 900,
            Timeframe::OneHour => 3600,
        }
    }

    /// How often a live caller should re-fetch and re-evaluate.
    pub fn refresh_seconds(self) -> u64 {
        match self {
            Timeframe::FifteenMin => 60,
            Timeframe::OneHour => 300,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::FifteenMin => "15min",
            Timeframe::OneHour => "1h",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "15min" | "15m" => Ok(Timeframe::FifteenMin),
            "1h" | "1hour" | "60min" => Ok(Timeframe::OneHour),
            other => Err(format!("unsupported timeframe: {}", other)),
        }
    }
}

pub trait MarketDataProvider {
    /// Most recent `limit` bars for a symbol, oldest first.
    fn bars(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Bar>, MarketDataError>;
}

/// Random-walk bars for running without a data feed.
#[derive(Debug, Clone)]
pub struct DemoMarketData {
    base_price: f64,
    seed: Option<u64>,
    end_time: Option<i64>,
}

impl Default for DemoMarketData {
    fn default() -> Self {
        Self {
            base_price: DEMO_BASE_PRICE,
            seed: None,
            end_time: None,
        }
    }
}

pub const DEMO_BASE_PRICE: f64 = 2045.0;
pub const DEMO_BAR_COUNT: usize = 100;

impl DemoMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    /// Fixed seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time of the last bar; defaults to now.
    pub fn with_end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn generate(&self, timeframe: Timeframe, count: usize) -> Vec<Bar> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let end = self.end_time.unwrap_or_else(|| Utc::now().timestamp());
        let interval = timeframe.bar_seconds();

        let mut bars = Vec::with_capacity(count);
        let mut base = self.base_price;
        for i in (0..count).rev() {
            let drift = (i as f64 / 10.0).sin() * 3.0;
            let open = base + rng.gen_range(-5.0..5.0);
            let close = open + rng.gen_range(-3.0..3.0);
            let high = open.max(close) + rng.gen_range(0.0..3.0);
            let low = open.min(close) - rng.gen_range(0.0..3.0);

            bars.push(Bar::new(end - i as i64 * interval, open, high, low, close));
            base = close + drift * 0.1;
        }

        debug!(count = bars.len(), %timeframe, "generated demo bars");
        bars
    }
}

impl MarketDataProvider for DemoMarketData {
    fn bars(
        &self,
        _symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Bar>, MarketDataError> {
        Ok(self.generate(timeframe, limit))
    }
}

/// Bars stored as a JSON array of `{time, open, high, low, close}`.
#[derive(Debug, Clone)]
pub struct JsonFileMarketData {
    path: PathBuf,
}

impl JsonFileMarketData {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarketDataProvider for JsonFileMarketData {
    fn bars(
        &self,
        _symbol: &str,
        _timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Bar>, MarketDataError> {
        let mut bars = load_bars_json(&self.path)?;
        if bars.len() > limit {
            bars.drain(..bars.len() - limit);
        }
        Ok(bars)
    }
}

pub fn parse_bars_json(raw: &str) -> Result<Vec<Bar>, MarketDataError> {
    let bars: Vec<Bar> = serde_json::from_str(raw)?;
    validate_bars(&bars)?;
    Ok(bars)
}

pub fn load_bars_json(path: &Path) -> Result<Vec<Bar>, MarketDataError> {
    let raw = fs::read_to_string(path).map_err(|source| MarketDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bars_json(&raw)
}
