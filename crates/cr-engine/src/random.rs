//! Source of randomness for the engine.
//!
//! Sessions use a seeded [`StdRng`]; tests can plug in their own source to
//! force particular draws.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The two draws the engine needs.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform index in `[0, upper)`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Build the session RNG: seeded when a seed is given, otherwise from OS
/// entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
