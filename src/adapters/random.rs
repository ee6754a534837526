use crate::domain::ports::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Adapts any `rand` generator to the generator's random port.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
