//! Rolling dice and inspecting the result.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DiceRng, GameError, MIN_DICE};

/// Face values from one throw of the dice, in roll order.
///
/// Stored inline for typical dice counts. Length always equals the requested
/// count; every value is in `[1, sides]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSet {
    values: SmallVec<[u16; 8]>,
}

impl RollSet {
    /// Wrap pre-rolled values. Used by tests and simulations.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = u16>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// The rolled faces, in order.
    #[must_use]
    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Number of dice in the roll.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the roll holds no dice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    /// True iff every die shows the same face.
    ///
    /// An empty roll is never a match; gameplay always rolls at least two
    /// dice, so this only matters for hand-built sets.
    #[must_use]
    pub fn all_match(&self) -> bool {
        match self.values.split_first() {
            Some((first, rest)) => rest.iter().all(|v| v == first),
            None => false,
        }
    }
}

/// Roll `count` dice with `sides` faces each.
///
/// Requires `count >= MIN_DICE` and `sides >= 2`; each face is drawn
/// independently and uniformly from `[1, sides]`.
pub fn roll_dice(rng: &mut DiceRng, count: usize, sides: u16) -> Result<RollSet, GameError> {
    if count < MIN_DICE {
        return Err(GameError::InvalidDiceCount {
            got: count,
            min: MIN_DICE,
        });
    }
    if sides < 2 {
        return Err(GameError::InvalidSides(sides));
    }

    let values = (0..count).map(|_| rng.roll_face(sides)).collect();
    Ok(RollSet { values })
}
