//! Deterministic random number generation for grid generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical grids
//! - **Forkable**: Each session draws from its own branch, so session N of a
//!   seeded controller is reproducible on its own
//! - **Seed capture**: The seed is kept so it can be logged and replayed
//! - **Serializable**: `GameRngState` captures and restores the stream in O(1)
//!
//! ```
//! use xoring_glow::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let session_rng = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(session_rng.seed(), again.fork().seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

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

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is still recorded, so a surprising grid can be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
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

    /// Generate a random boolean with given probability of true.
    ///
    /// `probability` must lie in `[0, 1]`; callers validate it first.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Capture the current state for checkpointing.
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

/// Serializable RNG state.
///
/// The ChaCha8 word position makes capture and restore O(1) however many
/// values were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
