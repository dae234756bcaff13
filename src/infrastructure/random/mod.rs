//! Random source backed by `rand`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use crate::domain::traits::RandomSource;

/// Standard generator, either seeded for reproducible runs or from OS entropy
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn draw(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}
