//! Error types for simulated handshakes

use tessera_core::{ErrorKind, ExchangeError};
use tessera_crypto::CipherError;
use thiserror::Error;

/// Errors from the simulation harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Key exchange step failed
    #[error("exchange failed: {0}")]
    Exchange(#[from] ExchangeError),

    /// Message could not be framed or parsed
    #[error("message framing failed: {0}")]
    Cipher(#[from] CipherError),

    /// The two peers derived different keys
    #[error("peers {left} and {right} derived different keys")]
    SecretMismatch {
        /// Name of the first peer
        left: String,
        /// Name of the second peer
        right: String,
    },
}

impl HarnessError {
    /// Classification of the underlying failure.
    ///
    /// A key mismatch means one side was handed bad input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Exchange(err) => err.kind(),
            Self::Cipher(err) => err.kind(),
            Self::SecretMismatch { .. } => ErrorKind::InvalidInput,
        }
    }
}
