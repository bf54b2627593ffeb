//! Production Environment implementation using OS randomness.
//!
//! `SystemEnv` draws from getrandom, so key pairs are not reproducible. Tests
//! that need repeatable keys use a seeded environment instead.

use crate::env::Environment;

/// Environment backed by the operating system's random source.
///
/// # Panics
///
/// Panics if the OS RNG fails. Without a working random source no private
/// key can be drawn, and the failure indicates an OS-level fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).expect("invariant: OS RNG failure is unrecoverable");
    }
}
