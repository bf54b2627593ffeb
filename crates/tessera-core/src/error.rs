//! Error types for group generation and key exchange.
//!
//! Every variant maps onto one [`ErrorKind`]. Errors are returned to the
//! caller as-is; nothing in the core recovers from them locally.

use tessera_crypto::{CipherError, ErrorKind};
use thiserror::Error;

/// Errors from group parameter generation and key exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// No `q` in the range with both `q` and `2q + 1` prime
    #[error("no safe prime with companion in [{lower}, {upper}]")]
    NoSafePrime {
        /// Lower end of the searched range
        lower: u64,
        /// Upper end of the searched range
        upper: u64,
    },

    /// No full-order generator exists for the prime
    #[error("no generator found for prime {prime}")]
    NoGenerator {
        /// The prime whose group was searched
        prime: u64,
    },

    /// Search range is empty or too large
    #[error("invalid search range [{lower}, {upper}]: {reason}")]
    InvalidRange {
        /// Requested lower bound
        lower: u64,
        /// Requested upper bound
        upper: u64,
        /// Why the range was rejected
        reason: &'static str,
    },

    /// Peer public key is outside `[1, p - 1]`
    #[error("invalid public key {value}: must be in [1, {max}]")]
    InvalidPublicKey {
        /// The rejected key
        value: u64,
        /// Largest admissible key (`p - 1`)
        max: u64,
    },

    /// Private key is outside `[1, p - 1]`
    #[error("invalid private key: must be in [1, {max}]")]
    InvalidPrivateKey {
        /// Largest admissible key (`p - 1`)
        max: u64,
    },

    /// Requested zero derived key bits
    #[error("derived key bit count must be positive")]
    InvalidBitCount,

    /// Group parameters violate the safe-prime or generator invariants
    #[error("invalid group parameters: {reason}")]
    InvalidParameters {
        /// Which invariant failed
        reason: &'static str,
    },

    /// Exclusion set leaves no private key reachable within the draw budget
    #[error("private key space exhausted: {excluded} of {space} keys excluded after {attempts} draws")]
    KeySpaceExhausted {
        /// Number of excluded keys inside the key space
        excluded: u64,
        /// Size of the key space (`p - 1`)
        space: u64,
        /// Draws made before giving up
        attempts: u32,
    },

    /// Derived key bits could not form a cipher key
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
}

impl ExchangeError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoSafePrime { .. } | Self::NoGenerator { .. } => ErrorKind::RangeExhausted,
            Self::KeySpaceExhausted { .. } => ErrorKind::KeySpaceExhausted,
            Self::InvalidRange { .. }
            | Self::InvalidPublicKey { .. }
            | Self::InvalidPrivateKey { .. }
            | Self::InvalidBitCount
            | Self::InvalidParameters { .. } => ErrorKind::InvalidInput,
            Self::Cipher(err) => err.kind(),
        }
    }
}
