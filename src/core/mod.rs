//! Core building blocks: RNG, configuration, errors.
//!
//! Everything here is game-rule agnostic. The scoring rules consume a
//! `GameConfig` rather than baking values in.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, PointsConfig, ThresholdConfig, MIN_DICE};
pub use error::GameError;
pub use rng::DiceRng;
