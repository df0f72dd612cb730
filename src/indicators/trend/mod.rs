//! Trend indicators: EMA cross

pub mod ema;

pub use ema::*;
