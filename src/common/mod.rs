//! Numeric building blocks shared by every indicator.

pub mod math;
