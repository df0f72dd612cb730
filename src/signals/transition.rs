//! Change detection between consecutive evaluations.
//!
//! The engine keeps no memory; whoever drives it passes the previous overall
//! signal back in.

use serde::{Deserialize, Serialize};

use crate::models::signal::OverallSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    None,
    EnteredBuy,
    EnteredSell,
    ClearedToNeutral,
}

impl TransitionKind {
    /// True for the transitions that should notify and be recorded.
    pub fn is_new_signal(self) -> bool {
        matches!(self, TransitionKind::EnteredBuy | TransitionKind::EnteredSell)
    }
}

/// `previous` is `None` before the first evaluation.
pub fn detect_transition(previous: Option<OverallSignal>, current: OverallSignal) -> TransitionKind {
    if previous == Some(current) {
        return TransitionKind::None;
    }
    match current {
        OverallSignal::Buy => TransitionKind::EnteredBuy,
        OverallSignal::Sell => TransitionKind::EnteredSell,
        OverallSignal::Neutral => match previous {
            Some(OverallSignal::Buy) | Some(OverallSignal::Sell) => {
                TransitionKind::ClearedToNeutral
            }
            _ => TransitionKind::None,
        },
    }
}
