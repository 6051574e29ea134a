//! Deterministic random number generation for deck construction.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical decks
//! - **Forkable**: Each restart draws from a fresh, reproducible branch
//! - **Context streams**: ID sampling, shuffling and key tokens use
//!   independent sequences, so changing one never perturbs the others
//!
//! ## Usage
//!
//! ```
//! use pokememo::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Each game gets its own branch
//! let game_rng = rng.fork();
//! let ids = game_rng.for_context("ids").sample_unique(5, 1, 151);
//! assert_eq!(ids.len(), 5);
//!
//! // Same seed, same fork counter, same draw
//! let again = GameRng::new(42).fork();
//! assert_eq!(ids, again.for_context("ids").sample_unique(5, 1, 151));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
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

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// The game driver forks once per deck build.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random u32 in the inclusive range `min..=max`.
    pub fn gen_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }

    /// Draw `count` distinct values uniformly from `min..=max`.
    ///
    /// Sampling is without replacement; the result is in draw order.
    /// Callers must ensure the range holds at least `count` values.
    pub fn sample_unique(&mut self, count: usize, min: u32, max: u32) -> Vec<u32> {
        let span = (max - min) as usize + 1;
        rand::seq::index::sample(&mut self.inner, span, count)
            .into_iter()
            .map(|offset| min + offset as u32)
            .collect()
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// 64 random bits rendered as 16 lowercase hex digits.
    pub fn hex_token(&mut self) -> String {
        format!("{:016x}", self.inner.gen::<u64>())
    }
}
