//! Game configuration types.
//!
//! The scoring engine never hardcodes point values or cutoffs — a
//! `GameConfig` is built once at startup and passed in. Thresholds are
//! normalized ratios over the possible roll range, so the same config scales
//! across any dice count and size.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Minimum number of dice per turn.
pub const MIN_DICE: usize = 2;

/// Point deltas awarded per turn, keyed by how the turn resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsConfig {
    /// Awarded on a winning roll.
    pub win: i64,
    /// Applied on a losing roll (typically negative).
    pub lose: i64,
    /// Applied on a draw.
    pub draw: i64,
    /// Jackpot for an all-match roll in Lucky mode.
    pub lucky_match: i64,
    /// Penalty for a low roll in Risk mode (typically negative).
    pub risk_penalty: i64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            win: 5,
            lose: -3,
            draw: 0,
            lucky_match: 10,
            risk_penalty: -3,
        }
    }
}

/// Normalized outcome cutoffs.
///
/// A roll's quality is its total mapped onto `[0, 1]` across the possible
/// range (all ones to all max faces). The win check runs first, then draw,
/// else lose; `win_ratio > draw_ratio` is enforced at construction so the
/// branches can never overlap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Ratio at or above which a roll wins.
    pub win_ratio: f64,
    /// Ratio at or above which a roll draws.
    pub draw_ratio: f64,
    /// In Risk mode, ratios below this take the penalty.
    pub risk_penalty_ratio: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            win_ratio: 0.75,
            draw_ratio: 0.55,
            risk_penalty_ratio: 0.35,
        }
    }
}

impl ThresholdConfig {
    /// Create validated thresholds.
    ///
    /// Requires `0 < draw_ratio < win_ratio <= 1` and
    /// `0 <= risk_penalty_ratio < 1`.
    pub fn new(
        win_ratio: f64,
        draw_ratio: f64,
        risk_penalty_ratio: f64,
    ) -> Result<Self, GameError> {
        let config = Self {
            win_ratio,
            draw_ratio,
            risk_penalty_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the ordering constraints.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.draw_ratio > 0.0 && self.draw_ratio < self.win_ratio && self.win_ratio <= 1.0) {
            return Err(GameError::InvalidThresholds(format!(
                "require 0 < draw_ratio < win_ratio <= 1, got draw={} win={}",
                self.draw_ratio, self.win_ratio
            )));
        }
        if !(0.0..1.0).contains(&self.risk_penalty_ratio) {
            return Err(GameError::InvalidThresholds(format!(
                "risk_penalty_ratio must be in [0, 1), got {}",
                self.risk_penalty_ratio
            )));
        }
        Ok(())
    }
}

/// Complete game configuration.
///
/// Built once at startup, never mutated afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Point deltas.
    pub points: PointsConfig,
    /// Outcome cutoffs.
    pub thresholds: ThresholdConfig,
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the point deltas.
    #[must_use]
    pub fn with_points(mut self, points: PointsConfig) -> Self {
        self.points = points;
        self
    }

    /// Replace the thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }
}
