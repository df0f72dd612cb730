//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{validate_bars, Bar, BarSeries, MacdIndicator};
pub use signal::{
    AggregateSignal, Components, Locale, OverallSignal, SignalBias, SignalLabel, SubSignal,
};
