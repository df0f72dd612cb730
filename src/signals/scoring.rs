//! Weighted vote that turns sub-signals into one decision.

use serde::{Deserialize, Serialize};

use crate::models::signal::{Components, OverallSignal, SignalBias, SubSignal};

pub const RSI_WEIGHT: u32 = 2;
pub const MACD_WEIGHT: u32 = 2;
pub const EMA_CROSS_WEIGHT: u32 = 1;

/// Minimum winning score for a buy or sell call.
pub const SIGNAL_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub rsi: u32,
    pub macd: u32,
    pub ema: u32,
    pub threshold: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rsi: RSI_WEIGHT,
            macd: MACD_WEIGHT,
            ema: EMA_CROSS_WEIGHT,
            threshold: SIGNAL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub buy: u32,
    pub sell: u32,
}

impl Tally {
    fn add(&mut self, sub: &SubSignal, weight: u32) {
        match sub.signal {
            SignalBias::Bullish => self.buy += weight,
            SignalBias::Bearish => self.sell += weight,
            SignalBias::Neutral => {}
        }
    }
}

pub fn tally(components: &Components, weights: &ScoreWeights) -> Tally {
    let mut tally = Tally::default();
    tally.add(&components.rsi, weights.rsi);
    tally.add(&components.macd, weights.macd);
    tally.add(&components.ema, weights.ema);
    tally
}

/// A side wins only at or above the threshold *and* strictly ahead of the other side.
pub fn decide(tally: Tally, threshold: u32) -> OverallSignal {
    if tally.buy >= threshold && tally.buy > tally.sell {
        OverallSignal::Buy
    } else if tally.sell >= threshold && tally.sell > tally.buy {
        OverallSignal::Sell
    } else {
        OverallSignal::Neutral
    }
}
