//! Pure scoring rules: mode selection, outcome classification, point deltas.
//!
//! Nothing in this module touches the RNG or any mutable state; every
//! function maps a resolved roll plus configuration to a verdict.

pub mod mode;
pub mod outcome;
pub mod scoring;

pub use mode::Mode;
pub use outcome::{classify, normalized_ratio, Outcome};
pub use scoring::{score_turn, TurnScore};
