//! # diceplay
//!
//! A configurable dice rolling game engine with pluggable prompting and
//! rendering.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Outcome classification and point deltas are state-free
//!    functions over a roll plus configuration. Given the same inputs they
//!    always produce the same verdict.
//!
//! 2. **Injected collaborators**: Randomness is a seeded [`DiceRng`] passed
//!    in at construction; prompting and rendering sit behind the
//!    [`PlayerInput`] and [`TurnReporter`] traits. The core never reads a
//!    line or formats a screen.
//!
//! 3. **Normalized thresholds**: Cutoffs are ratios over the possible roll
//!    range, so one configuration scales across any dice count and size.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `dice`: dice types, roll sets, the roll operation
//! - `rules`: modes, outcome classification, point deltas
//! - `stats`: running roll aggregates
//! - `game`: turn types and the session state machine
//! - `console`: stdin/stdout collaborator implementations

pub mod console;
pub mod core;
pub mod dice;
pub mod game;
pub mod rules;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{DiceRng, GameConfig, GameError, PointsConfig, ThresholdConfig, MIN_DICE};

pub use crate::dice::{roll_dice, DiceType, RollSet};

pub use crate::rules::{classify, normalized_ratio, score_turn, Mode, Outcome, TurnScore};

pub use crate::stats::Stats;

pub use crate::game::{GameSession, PlayerInput, TurnContext, TurnReporter, TurnResult};

pub use crate::console::{ConsolePrompt, ConsoleReporter};
