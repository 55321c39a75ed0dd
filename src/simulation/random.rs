//! Explicit random source for all stochastic simulation operations.
//!
//! Every component that needs randomness receives a `&mut Random`, so whole
//! runs can be reproduced by seeding one source and threading it through
//! `seed` and `tick`. The source is not thread-safe and is meant to live on
//! the single tick-processing thread.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::error::SimulationError;

/// A seedable uniform random source.
#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    /// Creates a source seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a deterministic source from a seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform value in [0, 1).
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Returns a uniform value in [min, max).
    ///
    /// Degenerate intervals are allowed: when `min == max` the result is
    /// always `min`.
    pub fn in_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// Returns a uniform index in [0, bound).
    ///
    /// # Errors
    ///
    /// Fails with [`SimulationError::ZeroIndexBound`] when `bound` is zero.
    pub fn index(&mut self, bound: usize) -> Result<usize, SimulationError> {
        if bound == 0 {
            return Err(SimulationError::ZeroIndexBound);
        }
        Ok(self.rng.random_range(0..bound))
    }

    /// Shuffles a slice in place with a Fisher-Yates pass.
    ///
    /// Each position i swaps with a uniformly chosen position in
    /// [i, len - 1], producing a uniform random permutation. Slices with
    /// fewer than two elements are left untouched.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in 0..items.len() - 1 {
            let j = self.rng.random_range(i..items.len());
            items.swap(i, j);
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
