//! Volatility-based entry / stop-loss / take-profit plan.

use serde::{Deserialize, Serialize};

use crate::models::signal::OverallSignal;

/// Stop distance in ATR multiples.
pub const STOP_ATR_MULTIPLIER: f64 = 1.5;
/// Target distance as a multiple of the stop distance (reported as "1:2").
pub const DEFAULT_REWARD_RISK_RATIO: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn from_overall(overall: OverallSignal) -> Option<Self> {
        match overall {
            OverallSignal::Buy => Some(TradeDirection::Buy),
            OverallSignal::Sell => Some(TradeDirection::Sell),
            OverallSignal::Neutral => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPlan {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub direction: TradeDirection,
    pub stop_distance: f64,
    pub target_distance: f64,
    pub reward_risk_ratio: f64,
}

impl RiskPlan {
    /// Signed move from entry to stop (negative for a buy).
    pub fn stop_offset(&self) -> f64 {
        self.stop_loss - self.entry
    }

    /// Signed move from entry to target (positive for a buy).
    pub fn target_offset(&self) -> f64 {
        self.take_profit - self.entry
    }

    pub fn ratio_label(&self) -> String {
        format!("1:{}", self.reward_risk_ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub stop_multiplier: f64,
    pub reward_risk_ratio: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            stop_multiplier: STOP_ATR_MULTIPLIER,
            reward_risk_ratio: DEFAULT_REWARD_RISK_RATIO,
        }
    }
}

impl RiskSettings {
    /// `None` when the ATR is missing, zero, or not finite.
    pub fn plan(
        &self,
        price: f64,
        atr: Option<f64>,
        direction: TradeDirection,
    ) -> Option<RiskPlan> {
        let atr = atr.filter(|a| a.is_finite() && *a > 0.0)?;
        let stop_distance = atr * self.stop_multiplier;
        let target_distance = stop_distance * self.reward_risk_ratio;

        let (stop_loss, take_profit) = match direction {
            TradeDirection::Buy => (price - stop_distance, price + target_distance),
            TradeDirection::Sell => (price + stop_distance, price - target_distance),
        };

        Some(RiskPlan {
            entry: price,
            stop_loss,
            take_profit,
            direction,
            stop_distance,
            target_distance,
            reward_risk_ratio: self.reward_risk_ratio,
        })
    }
}

/// Plan with the default 1.5 x ATR stop.
pub fn risk_plan(
    current_price: f64,
    atr: Option<f64>,
    is_buy: bool,
    reward_risk_ratio: f64,
) -> Option<RiskPlan> {
    let direction = if is_buy {
        TradeDirection::Buy
    } else {
        TradeDirection::Sell
    };
    RiskSettings {
        stop_multiplier: STOP_ATR_MULTIPLIER,
        reward_risk_ratio,
    }
    .plan(current_price, atr, direction)
}
