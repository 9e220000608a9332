use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Picks which trivia record to ask for.
pub trait RandomIndex: Send + Sync {
    /// Returns a value in `0..upper`. `upper` must be non-zero.
    fn next_index(&self, upper: u32) -> u32;
}

pub struct ThreadRandom;

impl RandomIndex for ThreadRandom {
    fn next_index(&self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomIndex for SeededRandom {
    fn next_index(&self, upper: u32) -> u32 {
        // A poisoned lock still holds a usable rng
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper)
    }
}

#[cfg(test)]
pub struct FixedIndex(pub u32);

#[cfg(test)]
impl RandomIndex for FixedIndex {
    fn next_index(&self, _upper: u32) -> u32 {
        self.0
    }
}
