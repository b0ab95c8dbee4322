//! Random value sources for noise synthesis.
//!
//! Noise generation never reaches for a global generator. Callers inject a
//! [`NoiseSource`]: seeded PCG32 streams for reproducible output, or an
//! entropy-seeded stream for the usual non-deterministic behavior.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of independent noise values.
pub trait NoiseSource {
    /// Returns the next value, uniformly distributed in `[-1.0, 1.0]`.
    fn next_value(&mut self) -> f64;
}

impl<R: Rng + ?Sized> NoiseSource for R {
    fn next_value(&mut self) -> f64 {
        self.gen_range(-1.0..=1.0)
    }
}

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates a PCG32 RNG seeded from OS entropy.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_entropy()
}

/// Creates either a seeded or an entropy-seeded RNG.
pub fn rng_for(seed: Option<u32>) -> Pcg32 {
    match seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    }
}
