//! Deterministic random number generation for dice rolls.
//!
//! The session never touches a global RNG: a `DiceRng` is injected at
//! construction, so the same seed replays the same game. Uses ChaCha8 for
//! speed while maintaining cryptographic quality randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for die draws.
///
/// Same seed produces the identical sequence of faces, which is what the
/// integration tests lean on.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one die face, uniformly distributed in `[1, sides]`.
    ///
    /// Callers validate `sides >= 2` before reaching this point.
    pub fn roll_face(&mut self, sides: u16) -> u16 {
        self.inner.gen_range(1..=sides)
    }
}
