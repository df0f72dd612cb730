//! Signal evaluation: scoring, decision, transitions.

pub mod decision;
pub mod engine;
pub mod scoring;
pub mod transition;

pub use decision::*;
pub use engine::*;
pub use scoring::*;
pub use transition::*;
