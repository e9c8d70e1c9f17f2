//! Deterministic random number generation for mine placement.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical mine layouts
//! - **Replayable**: Entropy-seeded generators remember their seed
//!
//! ```
//! use mine_crossing::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.gen_index(25), b.gen_index(25));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to lay out mines.
///
/// Uses ChaCha8 for speed while keeping layouts reproducible from a seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is kept so the game can be replayed with `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniform index in `0..bound`.
    ///
    /// Panics if `bound` is zero.
    pub fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}
