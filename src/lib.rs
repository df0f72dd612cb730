//! Goldsignal: indicator and signal-generation engine for OHLC bar series.
//!
//! The engine (`common::math`, `indicators`, `signals`) is a set of pure
//! functions over borrowed price arrays. Everything else in the crate
//! (`core`, `alerts`, `history`, `services`) is glue that feeds bars in and
//! reacts to the signals coming out.

pub mod alerts;
pub mod common;
pub mod config;
pub mod core;
pub mod history;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use indicators::IndicatorError;
pub use models::{AggregateSignal, Bar, OverallSignal, SignalBias, SubSignal};
pub use signals::decision::RiskPlan;
pub use signals::engine::{generate_signal, SignalEngine};
