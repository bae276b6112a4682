//! Point-delta computation for one resolved turn.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

use super::mode::Mode;
use super::outcome::{classify, normalized_ratio, Outcome};

/// The scoring verdict for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScore {
    /// Point delta to apply to the player.
    pub delta: i64,
    /// Plain threshold classification of the total.
    ///
    /// Reported even when a lucky match or risk penalty overrides the delta.
    pub outcome: Outcome,
    /// True when a Lucky-mode match grants an immediate extra turn.
    ///
    /// This is a side channel for the orchestrator; it is never encoded in
    /// the delta.
    pub bonus_turn: bool,
}

/// Score one turn.
///
/// Rules apply in strict priority order, first match wins:
/// 1. Lucky mode with an all-match roll pays the jackpot and flags the
///    bonus turn.
/// 2. Risk mode with a ratio below the penalty cutoff takes the penalty.
/// 3. Otherwise the threshold classification maps to win/draw/lose points.
///
/// Exactly one rule fires per turn. Modes are mutually exclusive, so rules 1
/// and 2 can never compete; the ordering is still binding for any mode added
/// later.
#[must_use]
pub fn score_turn(
    mode: Mode,
    total: u32,
    dice_count: usize,
    sides: u16,
    has_match: bool,
    config: &GameConfig,
) -> TurnScore {
    let outcome = classify(total, dice_count, sides, &config.thresholds);

    if mode == Mode::Lucky && has_match {
        return TurnScore {
            delta: config.points.lucky_match,
            outcome,
            bonus_turn: true,
        };
    }

    if mode == Mode::Risk {
        let ratio = normalized_ratio(total, dice_count, sides);
        if ratio < config.thresholds.risk_penalty_ratio {
            return TurnScore {
                delta: config.points.risk_penalty,
                outcome,
                bonus_turn: false,
            };
        }
    }

    let delta = match outcome {
        Outcome::Win => config.points.win,
        Outcome::Draw => config.points.draw,
        Outcome::Lose => config.points.lose,
    };

    TurnScore {
        delta,
        outcome,
        bonus_turn: false,
    }
}
