//! The closed set of supported dice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A standard polyhedral die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DiceType {
    /// All supported dice, in menu order.
    pub const ALL: [DiceType; 6] = [
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
    ];

    /// Number of faces on this die.
    #[must_use]
    pub const fn sides(self) -> u16 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
        }
    }
}

impl fmt::Display for DiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.sides())
    }
}

impl FromStr for DiceType {
    type Err = GameError;

    /// Parse a token like `"D6"` or `"d20"`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "D4" => Ok(DiceType::D4),
            "D6" => Ok(DiceType::D6),
            "D8" => Ok(DiceType::D8),
            "D10" => Ok(DiceType::D10),
            "D12" => Ok(DiceType::D12),
            "D20" => Ok(DiceType::D20),
            other => Err(GameError::UnknownDiceType(other.to_string())),
        }
    }
}
