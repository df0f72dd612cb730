//! Goldsignal CLI
//!
//! Evaluates the latest bars once and prints the signal. Bars come from the
//! JSON file given as the first argument, or from the demo generator.

use std::env;
use std::path::PathBuf;

use goldsignal::config::{get_environment, Config};
use goldsignal::core::runtime::{CycleReport, SignalMonitor};
use goldsignal::logging::init_logging;
use goldsignal::models::signal::Locale;
use goldsignal::services::market_data::{DemoMarketData, JsonFileMarketData, MarketDataProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    let provider: Box<dyn MarketDataProvider> = match env::args().nth(1) {
        Some(path) => Box::new(JsonFileMarketData::new(PathBuf::from(path))),
        None => Box::new(DemoMarketData::new()),
    };

    println!("Goldsignal");
    println!("  Environment: {}", get_environment());
    println!("  Symbol: {}", config.symbol);
    println!("  Timeframe: {}", config.timeframe);
    println!();

    let locale = config.locale;
    let mut monitor = SignalMonitor::new(config);
    match monitor.poll(provider.as_ref())? {
        Some(report) => print_report(&report, locale),
        None => println!("Not enough bars to evaluate."),
    }

    Ok(())
}

fn print_report(report: &CycleReport, locale: Locale) {
    let signal = &report.signal;
    println!(
        "  Signal: {} {}",
        signal.overall.icon(),
        signal.overall.text(locale)
    );
    println!("  Score: buy {} / sell {}", signal.buy_score, signal.sell_score);
    println!("  Price: ${:.2}", report.price);

    let components = &signal.components;
    for (name, sub) in [
        ("RSI", &components.rsi),
        ("MACD", &components.macd),
        ("EMA", &components.ema),
    ] {
        match sub.numeric_value {
            Some(v) => println!("  {}: {} ({:.2})", name, sub.text(locale), v),
            None => println!("  {}: {}", name, sub.text(locale)),
        }
    }

    match (signal.atr, report.volatility) {
        (Some(atr), Some(regime)) => println!("  ATR: {:.2} {}", atr, regime.text(locale)),
        _ => println!("  ATR: ---"),
    }

    if let Some(plan) = &report.plan {
        println!("  SL: ${:.2} ({:+.2})", plan.stop_loss, plan.stop_offset());
        println!("  TP: ${:.2} ({:+.2})", plan.take_profit, plan.target_offset());
        println!("  RR: {}", plan.ratio_label());
    }
}
