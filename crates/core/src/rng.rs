//! RNG module - seedable randomness for food placement
//!
//! Wraps a `StdRng` so that a session can be replayed from its seed. A session
//! without an explicit seed draws one from the thread RNG and keeps it around
//! for logging.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct FoodRng {
    rng: StdRng,
    seed: u64,
}

impl FoodRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    /// The seed this generator was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, max)`; `max` must be positive
    pub fn below(&mut self, max: i32) -> i32 {
        self.rng.random_range(0..max)
    }

    /// Uniform index into a slice of length `len`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
