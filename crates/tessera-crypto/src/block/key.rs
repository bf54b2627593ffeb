//! 10-bit cipher keys

use std::fmt;

use crate::error::CipherError;

/// Number of bits in a cipher key
pub const KEY_BITS: usize = 10;

/// Largest representable key
const MAX_KEY: u16 = (1 << KEY_BITS) - 1;

/// A validated 10-bit cipher key.
///
/// The engine never stores keys; a `CipherKey` is passed to every call.
/// Construction is the only place the 10-bit range is checked, so the block
/// functions themselves are infallible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CipherKey(u16);

impl CipherKey {
    /// Largest accepted key value (`0b11_1111_1111`).
    pub const MAX: u16 = MAX_KEY;

    /// Create a key from its integer value.
    ///
    /// # Errors
    ///
    /// - `InvalidKey`: if `value` does not fit in 10 bits
    pub fn new(value: u16) -> Result<Self, CipherError> {
        if value > MAX_KEY {
            return Err(CipherError::InvalidKey { key: u32::from(value), max: MAX_KEY });
        }
        Ok(Self(value))
    }

    /// Fold a bit sequence into a key, first element most significant.
    ///
    /// Each element must be 0 or 1. Sequences shorter than [`KEY_BITS`] give
    /// a smaller key; longer ones are accepted only if the leading bits are
    /// zero.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyBits`: if `bits` is empty or holds a non-binary digit
    /// - `InvalidKey`: if the folded value does not fit in 10 bits
    pub fn from_bits(bits: &[u8]) -> Result<Self, CipherError> {
        if bits.is_empty() {
            return Err(CipherError::InvalidKeyBits { reason: "empty bit sequence".to_string() });
        }

        let mut value: u32 = 0;
        for (position, &bit) in bits.iter().enumerate() {
            if bit > 1 {
                return Err(CipherError::InvalidKeyBits {
                    reason: format!("digit {bit} at position {position}"),
                });
            }
            value = (value << 1) | u32::from(bit);
            if value > u32::from(MAX_KEY) {
                return Err(CipherError::InvalidKey { key: value, max: MAX_KEY });
            }
        }

        Ok(Self(value as u16))
    }

    /// Integer value of the key.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Key bits, most significant first.
    pub fn bits(self) -> [u8; KEY_BITS] {
        let mut bits = [0u8; KEY_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = ((self.0 >> (KEY_BITS - 1 - i)) & 1) as u8;
        }
        bits
    }
}

impl TryFrom<u16> for CipherKey {
    type Error = CipherError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CipherKey> for u16 {
    fn from(key: CipherKey) -> Self {
        key.0
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherKey({:#012b})", self.0)
    }
}

impl fmt::Binary for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_key_range() {
        assert_eq!(CipherKey::new(0).unwrap().value(), 0);
        assert_eq!(CipherKey::new(1023).unwrap().value(), 1023);
    }

    #[test]
    fn rejects_eleven_bit_keys() {
        let err = CipherKey::new(1024).unwrap_err();
        assert_eq!(err, CipherError::InvalidKey { key: 1024, max: 1023 });
    }

    #[test]
    fn from_bits_is_big_endian() {
        let key = CipherKey::from_bits(&[1, 0, 0, 0, 1, 0, 0, 1, 0, 1]).unwrap();
        assert_eq!(key.value(), 0b10_0010_0101);
    }

    #[test]
    fn from_bits_accepts_short_sequences() {
        let key = CipherKey::from_bits(&[1, 1]).unwrap();
        assert_eq!(key.value(), 3);
    }

    #[test]
    fn from_bits_accepts_leading_zeros_past_ten_bits() {
        let key = CipherKey::from_bits(&[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();
        assert_eq!(key.value(), 1023);
    }

    #[test]
    fn from_bits_rejects_overflow() {
        let result = CipherKey::from_bits(&[1; 11]);
        assert!(matches!(result, Err(CipherError::InvalidKey { .. })));
    }

    #[test]
    fn from_bits_rejects_non_binary_digits() {
        let result = CipherKey::from_bits(&[1, 0, 2]);
        assert!(matches!(result, Err(CipherError::InvalidKeyBits { .. })));
    }

    #[test]
    fn from_bits_rejects_empty_sequence() {
        assert!(matches!(CipherKey::from_bits(&[]), Err(CipherError::InvalidKeyBits { .. })));
    }

    #[test]
    fn bits_roundtrip_through_from_bits() {
        let key = CipherKey::new(0b11_1000_1110).unwrap();
        assert_eq!(key.bits(), [1, 1, 1, 0, 0, 0, 1, 1, 1, 0]);
        assert_eq!(CipherKey::from_bits(&key.bits()).unwrap(), key);
    }

    #[test]
    fn debug_shows_ten_bits() {
        let key = CipherKey::new(5).unwrap();
        assert_eq!(format!("{key:?}"), "CipherKey(0b0000000101)");
    }
}
