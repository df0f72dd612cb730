//! Main signal evaluation engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi, macd_signal, rsi_signal};
use crate::indicators::momentum::{MacdSettings, RsiSettings};
use crate::indicators::trend::{ema_cross, CrossSettings};
use crate::indicators::validation::{validate_finite, validate_ohlc_lengths};
use crate::indicators::volatility::{calculate_atr, volatility_regime, AtrSettings, VolatilityRegime};
use crate::models::indicators::{validate_bars, Bar, BarSeries};
use crate::models::signal::{AggregateSignal, Components};
use crate::signals::decision::{RiskPlan, RiskSettings, TradeDirection};
use crate::signals::scoring::{decide, tally, ScoreWeights};

/// Bars needed before the longest indicator (EMA 50) contributes.
pub const MIN_BARS: usize = 50;

/// Every period, threshold and weight the engine reads. Defaults match the
/// fixed constants of each indicator module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub rsi: RsiSettings,
    pub macd: MacdSettings,
    pub atr: AtrSettings,
    pub cross: CrossSettings,
    pub weights: ScoreWeights,
    pub risk: RiskSettings,
}

#[derive(Debug, Clone, Default)]
pub struct SignalEngine {
    settings: EngineSettings,
}

impl SignalEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Compute every indicator, derive the sub-signals and vote.
    ///
    /// Short input never fails: missing indicators collapse to neutral
    /// placeholders. Mismatched columns or non-finite prices are errors.
    pub fn generate_signal(
        &self,
        closes: &[f64],
        highs: &[f64],
        lows: &[f64],
    ) -> Result<AggregateSignal, IndicatorError> {
        validate_ohlc_lengths(highs, lows, closes)?;
        validate_finite(closes)?;
        validate_finite(highs)?;
        validate_finite(lows)?;

        let s = &self.settings;
        let rsi = calculate_rsi(closes, s.rsi.period)?;
        let macd = calculate_macd(closes, s.macd.fast, s.macd.slow, s.macd.signal)?;
        let ema = ema_cross(closes, s.cross.short, s.cross.long)?;
        let atr = calculate_atr(highs, lows, closes, s.atr.period)?;
        trace!(?rsi, ?macd, ?atr, "indicator values");

        let components = Components {
            rsi: rsi_signal(rsi, &s.rsi),
            macd: macd_signal(macd.as_ref()),
            ema,
        };
        let scores = tally(&components, &s.weights);
        let overall = decide(scores, s.weights.threshold);

        debug!(
            bars = closes.len(),
            buy_score = scores.buy,
            sell_score = scores.sell,
            overall = %overall,
            "signal evaluated"
        );

        Ok(AggregateSignal {
            overall,
            buy_score: scores.buy,
            sell_score: scores.sell,
            components,
            atr,
        })
    }

    /// Validate the bars, split them into columns and evaluate.
    pub fn evaluate(&self, bars: &[Bar]) -> Result<AggregateSignal, IndicatorError> {
        validate_bars(bars)?;
        let series = BarSeries::from(bars);
        self.generate_signal(&series.closes, &series.highs, &series.lows)
    }

    /// Risk plan for an actionable signal; `None` for neutral or without ATR.
    pub fn plan_for(&self, signal: &AggregateSignal, price: f64) -> Option<RiskPlan> {
        let direction = TradeDirection::from_overall(signal.overall)?;
        self.settings.risk.plan(price, signal.atr, direction)
    }

    pub fn volatility(&self, signal: &AggregateSignal) -> Option<VolatilityRegime> {
        signal
            .atr
            .map(|atr| volatility_regime(atr, self.settings.atr.high_volatility))
    }
}

/// Evaluate with the default periods, weights and thresholds.
pub fn generate_signal(
    closes: &[f64],
    highs: &[f64],
    lows: &[f64],
) -> Result<AggregateSignal, IndicatorError> {
    SignalEngine::default().generate_signal(closes, highs, lows)
}
