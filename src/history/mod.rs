//! Bounded log of emitted buy/sell signals with a user-set outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::signal::{Locale, OverallSignal};
use crate::services::market_data::Timeframe;
use crate::signals::decision::RiskPlan;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("only buy or sell signals are recorded, got {0}")]
    NotActionable(OverallSignal),

    #[error("no history entry with id {0}")]
    UnknownEntry(u64),

    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    #[default]
    Pending,
    Win,
    Loss,
}

impl TradeOutcome {
    /// pending -> win -> loss -> pending
    pub fn next(self) -> Self {
        match self {
            TradeOutcome::Pending => TradeOutcome::Win,
            TradeOutcome::Win => TradeOutcome::Loss,
            TradeOutcome::Loss => TradeOutcome::Pending,
        }
    }

    pub fn text(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, TradeOutcome::Pending) => "未確定",
            (Locale::Ja, TradeOutcome::Win) => "勝ち",
            (Locale::Ja, TradeOutcome::Loss) => "負け",
            (Locale::En, TradeOutcome::Pending) => "Pending",
            (Locale::En, TradeOutcome::Win) => "Win",
            (Locale::En, TradeOutcome::Loss) => "Loss",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub signal: OverallSignal,
    pub price: f64,
    pub timeframe: Timeframe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RiskPlan>,
    #[serde(default)]
    pub result: TradeOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalHistory {
    limit: usize,
    next_id: u64,
    entries: Vec<HistoryEntry>,
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl SignalHistory {
    /// A limit of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 1,
            entries: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Prepend a new pending entry, dropping the oldest past the limit.
    /// Returns the new entry's id.
    pub fn record(
        &mut self,
        signal: OverallSignal,
        price: f64,
        timeframe: Timeframe,
        plan: Option<RiskPlan>,
        timestamp: DateTime<Utc>,
    ) -> Result<u64, HistoryError> {
        if !signal.is_actionable() {
            return Err(HistoryError::NotActionable(signal));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            HistoryEntry {
                id,
                timestamp,
                signal,
                price,
                timeframe,
                plan,
                result: TradeOutcome::Pending,
            },
        );
        self.entries.truncate(self.limit);
        Ok(id)
    }

    /// Advance an entry's outcome one step and return the new value.
    pub fn toggle_result(&mut self, id: u64) -> Result<TradeOutcome, HistoryError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(HistoryError::UnknownEntry(id))?;
        entry.result = entry.result.next();
        Ok(entry.result)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// (wins, losses) among settled entries.
    pub fn record_counts(&self) -> (usize, usize) {
        self.entries.iter().fold((0, 0), |(w, l), e| match e.result {
            TradeOutcome::Win => (w + 1, l),
            TradeOutcome::Loss => (w, l + 1),
            TradeOutcome::Pending => (w, l),
        })
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a saved history. Ids continue after the largest stored id and
    /// the stored limit is re-applied.
    pub fn from_json(raw: &str) -> Result<Self, HistoryError> {
        let mut history: SignalHistory = serde_json::from_str(raw)?;
        history.limit = history.limit.max(1);
        history.entries.truncate(history.limit);
        let max_id = history.entries.iter().map(|e| e.id).max().unwrap_or(0);
        history.next_id = history.next_id.max(max_id + 1);
        Ok(history)
    }
}
