//! Deterministic random number generation for dealing and policies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Forkable**: Each deal draws from its own branch so redeals never
//!   replay the previous shuffle
//! - **Context streams**: Dealing and policy randomness never share a stream
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use tarneeb41::core::GameRng;
//!
//! let mut table = GameRng::new(7);
//! let mut deal_a = table.fork();
//! let mut deal_b = table.fork();
//! let a: Vec<u32> = (0..8).map(|_| deal_a.gen_range(0..1000)).collect();
//! let b: Vec<u32> = (0..8).map(|_| deal_b.gen_range(0..1000)).collect();
//! assert_ne!(a, b);
//! ```

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Golden-ratio increment used to spread fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable ChaCha8 RNG used for shuffling and by the bundled policies.
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

    /// Seed a new RNG from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic branch.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(
            self.seed
                .wrapping_add(self.fork_counter.wrapping_mul(FORK_STRIDE)),
        )
    }

    /// Derive a stream dedicated to `context` (e.g. `"deal"`, `"seat-2"`).
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Sample uniformly from `range`.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(41);
        let mut rng2 = GameRng::new(41);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..52u32), rng2.gen_range(0..52u32));
        }
    }

    #[test]
    fn test_forks_differ_but_repeat() {
        let mut rng = GameRng::new(41);
        let mut first = rng.fork();
        let mut second = rng.fork();

        let a: Vec<u32> = (0..10).map(|_| first.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..10).map(|_| second.gen_range(0..1000)).collect();
        assert_ne!(a, b);

        let mut again = GameRng::new(41);
        assert_eq!(again.fork().seed(), first.seed());
    }

    #[test]
    fn test_context_streams_are_independent() {
        let rng = GameRng::new(41);
        let mut deal = rng.for_context("deal");
        let mut seat = rng.for_context("seat-0");

        let a: Vec<u32> = (0..10).map(|_| deal.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..10).map(|_| seat.gen_range(0..1000)).collect();
        assert_ne!(a, b);

        let mut deal_again = GameRng::new(41).for_context("deal");
        let c: Vec<u32> = (0..10).map(|_| deal_again.gen_range(0..1000)).collect();
        assert_eq!(a, c);
    }

    #[test]
    fn test_gen_range_inclusive() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let bid: u8 = rng.gen_range(2..=13);
            assert!((2..=13).contains(&bid));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(41);
        let mut data: Vec<u8> = (0..52).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (0..52).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(41);
        let items = [1, 2, 3];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(41);
        for _ in 0..37 {
            rng.gen_range(0..10u32);
        }
        let state = rng.state();
        let expected: Vec<u32> = (0..10).map(|_| rng.gen_range(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<u32> = (0..10).map(|_| restored.gen_range(0..1000)).collect();
        assert_eq!(expected, actual);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
