//! Error type for caller and configuration contract violations.
//!
//! Every variant is an invalid-argument class error: the core fails fast,
//! leaves all state unmodified, and never retries. Re-prompting on bad user
//! input belongs to the input collaborator, not to the core.

use thiserror::Error;

/// Errors produced by the dice game core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer dice requested than the configured minimum.
    #[error("dice count must be at least {min}, got {got}")]
    InvalidDiceCount { got: usize, min: usize },

    /// A die needs at least two faces to be worth rolling.
    #[error("dice must have at least 2 sides, got {0}")]
    InvalidSides(u16),

    /// Unrecognized game mode token.
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),

    /// Unrecognized dice type token.
    #[error("unknown dice type: {0:?}")]
    UnknownDiceType(String),

    /// Threshold configuration violates its ordering constraints.
    #[error("invalid threshold configuration: {0}")]
    InvalidThresholds(String),
}
