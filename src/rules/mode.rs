//! Scoring mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Which scoring ruleset applies to a turn.
///
/// Modes are mutually exclusive per turn: Lucky's match bonus and Risk's low
/// roll penalty can never both fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Plain outcome scoring.
    Classic,
    /// An all-match roll pays a jackpot and grants an immediate extra turn.
    Lucky,
    /// Low rolls take a penalty instead of the normal lose delta.
    Risk,
}

impl Mode {
    /// All modes, in menu order.
    pub const ALL: [Mode; 3] = [Mode::Classic, Mode::Lucky, Mode::Risk];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Classic => "classic",
            Mode::Lucky => "lucky",
            Mode::Risk => "risk",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Mode::Classic),
            "lucky" => Ok(Mode::Lucky),
            "risk" => Ok(Mode::Risk),
            other => Err(GameError::UnknownMode(other.to_string())),
        }
    }
}
