//! Running roll statistics.

use serde::{Deserialize, Serialize};

/// Running aggregate over counted turns.
///
/// Highest and lowest stay `None` until the first counted roll lands, so a
/// single low total is recorded correctly without a magic sentinel value.
/// Lucky-mode bonus rolls are recorded with `count_roll = false`: the match
/// counter still moves, the rest of the aggregate does not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Completed (counted) rolls.
    pub roll_count: u32,
    /// Sum of counted roll totals.
    pub total_value: u64,
    /// Highest counted total.
    pub highest: Option<u32>,
    /// Lowest counted total.
    pub lowest: Option<u32>,
    /// All-match rolls observed, counted or not.
    pub total_matches: u32,
}

impl Stats {
    /// Create empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one roll.
    ///
    /// The match counter increments whenever `has_match`, even for rolls
    /// excluded from the aggregate. When `count_roll` is false nothing else
    /// changes.
    pub fn update(&mut self, total: u32, has_match: bool, count_roll: bool) {
        if has_match {
            self.total_matches += 1;
        }

        if !count_roll {
            return;
        }

        self.roll_count += 1;
        self.total_value += u64::from(total);
        self.highest = Some(self.highest.map_or(total, |h| h.max(total)));
        self.lowest = Some(self.lowest.map_or(total, |l| l.min(total)));
    }

    /// Mean counted total, `0.0` before any counted roll.
    ///
    /// No rounding happens here; display formatting is the reporter's job.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.roll_count == 0 {
            0.0
        } else {
            self.total_value as f64 / f64::from(self.roll_count)
        }
    }

    /// Human-readable summary, one line per aggregate.
    ///
    /// The only place the average gets its two-decimal presentation.
    #[must_use]
    pub fn summary_lines(&self, points: i64) -> Vec<String> {
        if self.roll_count == 0 {
            return vec!["No rolls yet.".to_string()];
        }

        vec![
            format!("Completed rolls: {}", self.roll_count),
            format!("Total points: {points}"),
            format!("Average total: {:.2}", self.average()),
            format!("Total matches: {}", self.total_matches),
            format!("Highest total: {}", self.highest.unwrap_or(0)),
            format!("Lowest total: {}", self.lowest.unwrap_or(0)),
        ]
    }
}
