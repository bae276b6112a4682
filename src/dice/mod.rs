//! Dice types and the roll operation.

pub mod roll;
pub mod types;

pub use roll::{roll_dice, RollSet};
pub use types::DiceType;
