//! Error types for cipher and framing operations

use thiserror::Error;

/// Coarse classification shared by every Tessera error type.
///
/// Callers that only need to decide how to react (reject input, widen a
/// search range, shrink an exclusion set) can match on the kind instead of
/// the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bounded search ran out of candidates
    RangeExhausted,
    /// A value supplied by the caller is outside its domain
    InvalidInput,
    /// Every admissible private key is excluded
    KeySpaceExhausted,
}

/// Errors from cipher and framing operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key does not fit in 10 bits
    #[error("invalid cipher key: {key} exceeds {max}")]
    InvalidKey {
        /// The rejected key value
        key: u32,
        /// Largest accepted key
        max: u16,
    },

    /// Key bit sequence is empty or contains a digit other than 0 or 1
    #[error("invalid key bits: {reason}")]
    InvalidKeyBits {
        /// What was wrong with the sequence
        reason: String,
    },

    /// Character cannot be carried in a single 8-bit block
    #[error("character {ch:?} at position {position} does not fit in one block")]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Character index within the input text
        position: usize,
    },

    /// Value does not fit in an 8-bit block
    #[error("invalid block value: {value} exceeds 255")]
    InvalidBlock {
        /// The rejected value
        value: u32,
    },

    /// Permutation table does not describe bits of an 8-bit block
    #[error("invalid permutation table: {reason}")]
    InvalidTable {
        /// What was wrong with the table
        reason: String,
    },

    /// Binary string is malformed
    #[error("invalid bit string: {reason}")]
    InvalidBitString {
        /// What was wrong with the string
        reason: String,
    },
}

impl CipherError {
    /// Classification of this error.
    ///
    /// Every cipher error is caused by caller input.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cipher_errors_are_invalid_input() {
        let errors = [
            CipherError::InvalidKey { key: 1024, max: 1023 },
            CipherError::InvalidKeyBits { reason: "empty".to_string() },
            CipherError::InvalidCharacter { ch: '€', position: 0 },
            CipherError::InvalidBlock { value: 256 },
            CipherError::InvalidBitString { reason: "odd length".to_string() },
            CipherError::InvalidTable { reason: "9 entries".to_string() },
        ];

        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{err}");
        }
    }

    #[test]
    fn error_display() {
        let err = CipherError::InvalidKey { key: 2048, max: 1023 };
        assert_eq!(err.to_string(), "invalid cipher key: 2048 exceeds 1023");

        let err = CipherError::InvalidCharacter { ch: '€', position: 3 };
        assert_eq!(err.to_string(), "character '€' at position 3 does not fit in one block");
    }
}
