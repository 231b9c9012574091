//! Seeded random number generation for shuffling a draw.
//!
//! A reading is reproducible only when its seed is known. `ReadingRng::new`
//! takes an explicit seed (tests, replays); `ReadingRng::from_clock` derives
//! one from the wall clock, which is what an interactive session uses. The
//! seed is always retrievable so a caller can record it next to the reading.
//!
//! ```
//! use arcana_graph::core::ReadingRng;
//!
//! let mut a = ReadingRng::new(7);
//! let mut b = ReadingRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to permute a draw.
///
/// Uses ChaCha8 for speed while keeping a uniform distribution.
#[derive(Clone, Debug)]
pub struct ReadingRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ReadingRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the current wall-clock time.
    ///
    /// Falls back to seed 0 if the clock reads before the Unix epoch.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Seed derived from the wall clock, nanosecond resolution folded to 64 bits.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| {
            let nanos = elapsed.as_nanos();
            (nanos as u64) ^ ((nanos >> 64) as u64)
        })
        .unwrap_or(0)
}
