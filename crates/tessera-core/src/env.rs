//! Environment abstraction for deterministic testing.
//!
//! Decouples key generation from the source of randomness. Production code
//! uses [`crate::SystemEnv`]; tests inject a seeded generator so private keys
//! and everything derived from them are reproducible.

/// Abstract source of randomness.
///
/// # Invariants
///
/// - Given the same seed, a deterministic implementation produces the same
///   sequence of bytes
/// - Draws are independent, synchronous calls with no ordering semantics
///   beyond the sequence itself
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Generates a uniformly distributed integer in `[low, high]`.
    ///
    /// Uses rejection sampling so every value in the range is equally
    /// likely. Returns `low` when `high <= low`.
    fn random_in_range(&self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }

        let span = high - low;
        if span == u64::MAX {
            return self.random_u64();
        }

        let span = span + 1;
        // Largest multiple of span that fits, values above it are biased
        let zone = u64::MAX - (u64::MAX % span);
        loop {
            let draw = self.random_u64();
            if draw < zone {
                return low + draw % span;
            }
        }
    }
}
