//! Alert text for new buy/sell signals and the sinks that deliver it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::models::signal::{Locale, OverallSignal};
use crate::services::market_data::Timeframe;
use crate::signals::decision::RiskPlan;

const RULE: &str = "━━━━━━━━━━━━━━";

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Short notification title, e.g. "📈 買いシグナル".
    pub title: String,
    /// Multi-line message body.
    pub body: String,
}

pub trait AlertSink {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError>;
}

/// Writes alerts to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn deliver(&self, alert: &Alert) -> Result<(), AlertError> {
        info!(title = %alert.title, body = %alert.body, "signal alert");
        Ok(())
    }
}

fn signal_word(signal: OverallSignal, locale: Locale) -> String {
    match locale {
        Locale::Ja => format!("{}シグナル", signal.text(locale)),
        Locale::En => format!("{} signal", signal.text(locale)),
    }
}

fn timeframe_line(timeframe: Timeframe, locale: Locale) -> String {
    match locale {
        Locale::Ja => format!("⏰ {}足", timeframe),
        Locale::En => format!("⏰ {} bars", timeframe),
    }
}

/// Build the alert for a buy or sell signal. Neutral signals produce none.
pub fn format_alert(
    symbol: &str,
    signal: OverallSignal,
    price: f64,
    plan: Option<&RiskPlan>,
    timeframe: Timeframe,
    locale: Locale,
) -> Option<Alert> {
    if !signal.is_actionable() {
        return None;
    }

    let word = signal_word(signal, locale);
    let title = format!("{} {}", signal.icon(), word);

    let price_label = match locale {
        Locale::Ja => "価格",
        Locale::En => "Price",
    };
    let ratio_label = match locale {
        Locale::Ja => "RR比",
        Locale::En => "RR",
    };

    let mut lines = vec![
        format!("🥇 {} {} {}", symbol, signal.icon(), word),
        RULE.to_string(),
        format!("💰 {}: ${:.2}", price_label, price),
    ];
    if let Some(plan) = plan {
        lines.push(format!("🛑 SL: ${:.2}", plan.stop_loss));
        lines.push(format!("🎯 TP: ${:.2}", plan.take_profit));
        lines.push(format!("📊 {}: {}", ratio_label, plan.ratio_label()));
    }
    lines.push(timeframe_line(timeframe, locale));
    lines.push(RULE.to_string());

    Some(Alert {
        title,
        body: lines.join("\n"),
    })
}
