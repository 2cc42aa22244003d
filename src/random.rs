//! Random sources handed to the request handlers.
//!
//! Nothing here is meant to be cryptographic; the values only drive the
//! simulated metrics and the joke pick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub trait Entropy: Send + Sync {
    /// A value in `[0, 1)`.
    fn unit(&self) -> f64;

    /// An index in `[0, len)`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize {
        let scaled = (self.unit() * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }
}

/// Unseeded thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }

    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator for reproducible runs.
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Entropy for SeededEntropy {
    fn unit(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..1.0)
    }
}

/// Always yields the same value. Useful for pinning handler output in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub f64);

impl Entropy for FixedEntropy {
    fn unit(&self) -> f64 {
        self.0
    }
}
