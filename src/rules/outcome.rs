//! Outcome classification over the normalized roll range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ThresholdConfig;

/// How a roll total classifies against the thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Lose => "lose",
        };
        f.write_str(name)
    }
}

/// Roll quality normalized to `[0, 1]` across the possible range.
///
/// `0.0` is all ones, `1.0` is all max faces. A degenerate range (single
/// sided dice) maps to `1.0`. Normalizing here is what lets one threshold
/// config scale across any dice count and size.
#[must_use]
pub fn normalized_ratio(total: u32, dice_count: usize, sides: u16) -> f64 {
    let min_possible = dice_count as u32;
    let max_possible = dice_count as u32 * u32::from(sides);

    if max_possible == min_possible {
        return 1.0;
    }

    f64::from(total.saturating_sub(min_possible)) / f64::from(max_possible - min_possible)
}

/// Classify a roll total.
///
/// Win is checked first, then draw, else lose. `win_ratio > draw_ratio` is
/// guaranteed by [`ThresholdConfig`] validation, so the order alone fixes the
/// tie-break.
#[must_use]
pub fn classify(
    total: u32,
    dice_count: usize,
    sides: u16,
    thresholds: &ThresholdConfig,
) -> Outcome {
    let ratio = normalized_ratio(total, dice_count, sides);

    if ratio >= thresholds.win_ratio {
        Outcome::Win
    } else if ratio >= thresholds.draw_ratio {
        Outcome::Draw
    } else {
        Outcome::Lose
    }
}
