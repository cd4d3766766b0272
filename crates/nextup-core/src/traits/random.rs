use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source emitting floats in `[0, 1)`.
///
/// Production wires [`EntropyRandom`]; tests use [`SeededRandom`] or a
/// closure that replays a scripted sequence.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Generator seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct EntropyRandom(StdRng);

impl EntropyRandom {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
