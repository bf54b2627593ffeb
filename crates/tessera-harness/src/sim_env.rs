//! Deterministic Environment for simulation.
//!
//! `SeededEnv` replays the same random stream for the same seed, so every key
//! pair, shared secret and ciphertext in a test run is reproducible.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessera_core::Environment;

/// Seeded environment backed by ChaCha8.
///
/// Clones share one stream: two sessions built from clones of the same
/// `SeededEnv` interleave their draws instead of repeating each other.
#[derive(Clone)]
pub struct SeededEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
    seed: u64,
}

impl SeededEnv {
    /// Create an environment from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))), seed }
    }

    /// Seed this environment was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for SeededEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeededEnv").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl Environment for SeededEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        // A panic while holding the lock cannot leave the RNG half-updated
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.fill_bytes(buffer);
    }
}
