//! Seeded random number generation for grid population.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same grid layout
//! - **Forkable**: Each new round draws from its own independent stream
//! - **Reportable**: The seed is kept so a layout can be reproduced later
//!
//! ## Usage
//!
//! ```
//! use kanamemo::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for the next round
//! let mut round_rng = rng.fork();
//!
//! // Forks are deterministic: same parent seed, same fork counter, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut round_rng2 = rng2.fork();
//! assert_eq!(round_rng.seed(), round_rng2.seed());
//! assert_eq!(round_rng.gen_range_usize(0..100), round_rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for shuffles and symbol selection.
///
/// Uses ChaCha8 for speed. Gameplay fairness only needs a uniform source,
/// not cryptographic strength.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from a freshly drawn random seed.
    ///
    /// The seed is still recorded, see [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(42);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        assert_eq!(original.gen_range_usize(0..1000), replay.gen_range_usize(0..1000));
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let value = rng.gen_range_usize(3..9);
            assert!((3..9).contains(&value));
        }
    }
}
