//! Evaluation cycle driver: keeps the last signal, records new ones and
//! dispatches alerts.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::alerts::{format_alert, AlertSink, LogAlertSink};
use crate::config::Config;
use crate::history::SignalHistory;
use crate::indicators::error::IndicatorError;
use crate::indicators::volatility::VolatilityRegime;
use crate::models::indicators::Bar;
use crate::models::signal::{AggregateSignal, OverallSignal};
use crate::services::market_data::{MarketDataError, MarketDataProvider, DEMO_BAR_COUNT};
use crate::signals::decision::RiskPlan;
use crate::signals::engine::SignalEngine;
use crate::signals::transition::{detect_transition, TransitionKind};

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}

/// Outcome of one evaluated cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub signal: AggregateSignal,
    pub price: f64,
    pub plan: Option<RiskPlan>,
    pub transition: TransitionKind,
    pub volatility: Option<VolatilityRegime>,
    /// History id when the cycle recorded a new signal.
    pub history_id: Option<u64>,
}

pub struct SignalMonitor {
    config: Config,
    engine: SignalEngine,
    history: SignalHistory,
    sink: Box<dyn AlertSink>,
    last_signal: Option<OverallSignal>,
}

impl SignalMonitor {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Box::new(LogAlertSink))
    }

    pub fn with_sink(config: Config, sink: Box<dyn AlertSink>) -> Self {
        Self {
            engine: SignalEngine::new(config.engine),
            history: SignalHistory::new(config.history_limit),
            config,
            sink,
            last_signal: None,
        }
    }

    /// Resume with a previously saved history.
    pub fn with_history(mut self, history: SignalHistory) -> Self {
        self.history = history;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &SignalHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SignalHistory {
        &mut self.history
    }

    pub fn last_signal(&self) -> Option<OverallSignal> {
        self.last_signal
    }

    /// Run one cycle over `bars` (oldest first).
    ///
    /// Returns `Ok(None)` without touching state when there are fewer bars
    /// than the configured minimum.
    pub fn on_bars(&mut self, bars: &[Bar]) -> Result<Option<CycleReport>, IndicatorError> {
        let Some(last) = bars.last() else {
            warn!("no bars to evaluate");
            return Ok(None);
        };
        if bars.len() < self.config.min_bars {
            warn!(
                bars = bars.len(),
                min_bars = self.config.min_bars,
                "not enough bars, skipping evaluation"
            );
            return Ok(None);
        }

        let signal = self.engine.evaluate(bars)?;
        let price = last.close;
        let plan = self.engine.plan_for(&signal, price);
        let volatility = self.engine.volatility(&signal);
        let transition = detect_transition(self.last_signal, signal.overall);
        self.last_signal = Some(signal.overall);

        let mut history_id = None;
        if transition.is_new_signal() {
            info!(
                symbol = %self.config.symbol,
                signal = %signal.overall,
                price,
                "new signal"
            );
            let timestamp = DateTime::<Utc>::from_timestamp(last.time, 0).unwrap_or_else(Utc::now);
            match self.history.record(
                signal.overall,
                price,
                self.config.timeframe,
                plan,
                timestamp,
            ) {
                Ok(id) => history_id = Some(id),
                Err(e) => warn!(error = %e, "failed to record signal"),
            }
            self.dispatch(&signal, price, plan.as_ref());
        } else {
            debug!(signal = %signal.overall, ?transition, "no new signal");
        }

        Ok(Some(CycleReport {
            signal,
            price,
            plan,
            transition,
            volatility,
            history_id,
        }))
    }

    /// Fetch from `provider` and run one cycle.
    pub fn poll<P>(&mut self, provider: &P) -> Result<Option<CycleReport>, MonitorError>
    where
        P: MarketDataProvider + ?Sized,
    {
        let limit = self.config.min_bars.max(DEMO_BAR_COUNT);
        let bars = provider.bars(&self.config.symbol, self.config.timeframe, limit)?;
        Ok(self.on_bars(&bars)?)
    }

    fn dispatch(&self, signal: &AggregateSignal, price: f64, plan: Option<&RiskPlan>) {
        let Some(alert) = format_alert(
            &self.config.symbol,
            signal.overall,
            price,
            plan,
            self.config.timeframe,
            self.config.locale,
        ) else {
            return;
        };
        if let Err(e) = self.sink.deliver(&alert) {
            warn!(error = %e, "alert delivery failed");
        }
    }
}
