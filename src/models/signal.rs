//! Signal data models: per-indicator sub-signals and the aggregate decision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction an individual indicator leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalBias {
    Bullish,
    Bearish,
    Neutral,
}

/// Language used for human-readable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(format!("unknown locale: {}", other)),
        }
    }
}

/// Descriptive label attached to a sub-signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLabel {
    // RSI
    Overbought,
    Oversold,
    Strong,
    Weak,
    // MACD
    BuySign,
    SellSign,
    BullishContinuation,
    BearishContinuation,
    // EMA cross
    UptrendReversal,
    DowntrendReversal,
    Uptrend,
    Downtrend,
    Flat,
    // shared
    Neutral,
    Unavailable,
}

impl SignalLabel {
    pub fn text(self, locale: Locale) -> &'static str {
        use SignalLabel::*;
        match locale {
            Locale::Ja => match self {
                Overbought => "買われすぎ",
                Oversold => "売られすぎ",
                Strong => "強気",
                Weak => "弱気",
                BuySign => "買いサイン",
                SellSign => "売りサイン",
                BullishContinuation => "強気継続",
                BearishContinuation => "弱気継続",
                UptrendReversal => "上昇転換",
                DowntrendReversal => "下降転換",
                Uptrend => "上昇トレンド",
                Downtrend => "下降トレンド",
                Flat => "横ばい",
                Neutral => "中立",
                Unavailable => "---",
            },
            Locale::En => match self {
                Overbought => "Overbought",
                Oversold => "Oversold",
                Strong => "Strong",
                Weak => "Weak",
                BuySign => "Buy sign",
                SellSign => "Sell sign",
                BullishContinuation => "Bullish continuation",
                BearishContinuation => "Bearish continuation",
                UptrendReversal => "Uptrend reversal",
                DowntrendReversal => "Downtrend reversal",
                Uptrend => "Uptrend",
                Downtrend => "Downtrend",
                Flat => "Flat",
                Neutral => "Neutral",
                Unavailable => "---",
            },
        }
    }
}

/// One indicator's vote. Carries no history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubSignal {
    pub signal: SignalBias,
    pub label: SignalLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
}

impl SubSignal {
    pub fn new(signal: SignalBias, label: SignalLabel, numeric_value: Option<f64>) -> Self {
        Self {
            signal,
            label,
            numeric_value,
        }
    }

    /// Neutral placeholder used when the indicator lacks history.
    pub fn unavailable() -> Self {
        Self::new(SignalBias::Neutral, SignalLabel::Unavailable, None)
    }

    pub fn is_available(&self) -> bool {
        self.label != SignalLabel::Unavailable
    }

    pub fn text(&self, locale: Locale) -> &'static str {
        self.label.text(locale)
    }
}

/// Final call of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallSignal {
    Buy,
    Sell,
    Neutral,
}

impl OverallSignal {
    pub fn is_actionable(self) -> bool {
        !matches!(self, OverallSignal::Neutral)
    }

    pub fn text(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, OverallSignal::Buy) => "買い",
            (Locale::Ja, OverallSignal::Sell) => "売り",
            (Locale::Ja, OverallSignal::Neutral) => "様子見",
            (Locale::En, OverallSignal::Buy) => "Buy",
            (Locale::En, OverallSignal::Sell) => "Sell",
            (Locale::En, OverallSignal::Neutral) => "Wait",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OverallSignal::Buy => "📈",
            OverallSignal::Sell => "📉",
            OverallSignal::Neutral => "⏳",
        }
    }
}

impl fmt::Display for OverallSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverallSignal::Buy => "buy",
            OverallSignal::Sell => "sell",
            OverallSignal::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub rsi: SubSignal,
    pub macd: SubSignal,
    pub ema: SubSignal,
}

/// Result of one `generate_signal` run. Recomputed from scratch every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateSignal {
    pub overall: OverallSignal,
    pub buy_score: u32,
    pub sell_score: u32,
    pub components: Components,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
}
