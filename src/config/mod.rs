//! Runtime configuration.
//!
//! Defaults reproduce the fixed constants of the engine. Every value can be
//! overridden through a `GOLDSIGNAL_*` environment variable; the binary loads
//! `.env` with `dotenvy` before calling [`Config::from_env`].

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{validate_period, validate_period_pair};
use crate::models::signal::Locale;
use crate::services::market_data::Timeframe;
use crate::signals::engine::{EngineSettings, MIN_BARS};

pub const ENV_PREFIX: &str = "GOLDSIGNAL_";
pub const DEFAULT_SYMBOL: &str = "XAU/USD";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid indicator settings: {0}")]
    Indicator(#[from] IndicatorError),
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Deployment environment from `APP_ENV` (default `development`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub locale: Locale,
    pub engine: EngineSettings,
    pub history_limit: usize,
    /// Evaluation is skipped below this many bars.
    pub min_bars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            timeframe: Timeframe::default(),
            locale: Locale::default(),
            engine: EngineSettings::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            min_bars: MIN_BARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from defaults plus whatever `lookup` returns for each
    /// `GOLDSIGNAL_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Config::default();

        if let Some(symbol) = get("SYMBOL") {
            config.symbol = symbol;
        }
        override_with(&get, "TIMEFRAME", &mut config.timeframe)?;
        override_with(&get, "LOCALE", &mut config.locale)?;
        override_with(&get, "HISTORY_LIMIT", &mut config.history_limit)?;
        override_with(&get, "MIN_BARS", &mut config.min_bars)?;

        let engine = &mut config.engine;
        override_with(&get, "RSI_PERIOD", &mut engine.rsi.period)?;
        override_with(&get, "RSI_OVERBOUGHT", &mut engine.rsi.overbought)?;
        override_with(&get, "RSI_OVERSOLD", &mut engine.rsi.oversold)?;
        override_with(&get, "MACD_FAST", &mut engine.macd.fast)?;
        override_with(&get, "MACD_SLOW", &mut engine.macd.slow)?;
        override_with(&get, "MACD_SIGNAL", &mut engine.macd.signal)?;
        override_with(&get, "ATR_PERIOD", &mut engine.atr.period)?;
        override_with(&get, "ATR_HIGH_VOLATILITY", &mut engine.atr.high_volatility)?;
        override_with(&get, "EMA_SHORT", &mut engine.cross.short)?;
        override_with(&get, "EMA_LONG", &mut engine.cross.long)?;
        override_with(&get, "SCORE_THRESHOLD", &mut engine.weights.threshold)?;
        override_with(&get, "STOP_ATR_MULTIPLIER", &mut engine.risk.stop_multiplier)?;
        override_with(&get, "REWARD_RISK_RATIO", &mut engine.risk.reward_risk_ratio)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        validate_period("rsi", engine.rsi.period)?;
        validate_period("atr", engine.atr.period)?;
        validate_period("macd signal", engine.macd.signal)?;
        validate_period_pair("macd", engine.macd.fast, engine.macd.slow)?;
        validate_period_pair("ema cross", engine.cross.short, engine.cross.long)?;

        if !(engine.rsi.oversold < engine.rsi.overbought) {
            return Err(ConfigError::invalid(
                "RSI_OVERSOLD",
                engine.rsi.oversold,
                "must be below RSI_OVERBOUGHT",
            ));
        }
        if engine.weights.threshold == 0 {
            return Err(ConfigError::invalid("SCORE_THRESHOLD", 0, "must be positive"));
        }
        for (key, value) in [
            ("STOP_ATR_MULTIPLIER", engine.risk.stop_multiplier),
            ("REWARD_RISK_RATIO", engine.risk.reward_risk_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(key, value, "must be a positive number"));
            }
        }
        if self.history_limit == 0 {
            return Err(ConfigError::invalid("HISTORY_LIMIT", 0, "must be positive"));
        }
        Ok(())
    }
}

fn override_with<T>(
    get: &impl Fn(&str) -> Option<String>,
    name: &str,
    target: &mut T,
) -> Result<(), ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(raw) = get(name) {
        *target = raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(name, &raw, e.to_string()))?;
    }
    Ok(())
}
