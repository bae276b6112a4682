//! Per-turn value types.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceType, RollSet};
use crate::rules::{Mode, Outcome};

/// What the player chose for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Scoring mode for this turn.
    pub mode: Mode,
    /// Which die to throw.
    pub dice_type: DiceType,
    /// How many dice to throw.
    pub dice_count: usize,
}

impl TurnContext {
    /// Create a turn context.
    #[must_use]
    pub fn new(mode: Mode, dice_type: DiceType, dice_count: usize) -> Self {
        Self {
            mode,
            dice_type,
            dice_count,
        }
    }
}

/// One fully resolved turn. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// The player's choices.
    pub context: TurnContext,
    /// The rolled faces.
    pub rolls: RollSet,
    /// Sum of the faces.
    pub total: u32,
    /// True iff all dice showed the same face.
    pub has_match: bool,
    /// Threshold classification of the total.
    pub outcome: Outcome,
    /// Point delta this turn applied.
    pub points_delta: i64,
    /// Cumulative player points after this turn.
    pub points_total: i64,
    /// True when this turn earned an immediate extra turn.
    pub bonus_turn: bool,
}
