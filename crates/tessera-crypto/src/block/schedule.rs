//! Subkey generation from a 10-bit key
//!
//! ```text
//! key ──P10──▶ [L5 | R5] ──LS-1──▶ once ──P8──▶ k1
//!                                   │
//!                                   └──LS-2──▶ twice ──P8──▶ k2
//! ```
//!
//! Each rotation is a circular left shift applied to both 5-bit halves
//! independently.

use super::{
    key::{CipherKey, KEY_BITS},
    tables::{P8, P10},
};

/// Width of one key half
const HALF_BITS: usize = KEY_BITS / 2;

/// Mask covering one key half
const HALF_MASK: u16 = (1 << HALF_BITS) - 1;

/// The two round subkeys derived from a [`CipherKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubKeys {
    /// Subkey for the first encryption round
    pub k1: u8,
    /// Subkey for the second encryption round
    pub k2: u8,
}

/// Derive the round subkeys for `key`.
///
/// Cheap enough to recompute on every block; nothing is cached.
pub fn key_schedule(key: CipherKey) -> SubKeys {
    let permuted = select_bits(key.value(), KEY_BITS, &P10);
    let once = rotate_halves(permuted);
    let twice = rotate_halves(rotate_halves(once));

    SubKeys {
        k1: select_bits(once, KEY_BITS, &P8) as u8,
        k2: select_bits(twice, KEY_BITS, &P8) as u8,
    }
}

/// Gather bits of a `width`-bit input into a new value, MSB first.
///
/// Output bit `i` (counted from the most significant end of a
/// `table.len()`-bit result) is input bit `table[i]`.
fn select_bits(input: u16, width: usize, table: &[u8]) -> u16 {
    table.iter().fold(0, |out, &pos| {
        let bit = (input >> (width - usize::from(pos))) & 1;
        (out << 1) | bit
    })
}

/// Circular left shift of each 5-bit half of a 10-bit value.
fn rotate_halves(bits: u16) -> u16 {
    let rotate = |half: u16| ((half << 1) | (half >> (HALF_BITS - 1))) & HALF_MASK;
    let left = (bits >> HALF_BITS) & HALF_MASK;
    let right = bits & HALF_MASK;
    (rotate(left) << HALF_BITS) | rotate(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: u16) -> CipherKey {
        CipherKey::new(value).unwrap()
    }

    #[test]
    fn zero_key_yields_zero_subkeys() {
        assert_eq!(key_schedule(key(0)), SubKeys { k1: 0, k2: 0 });
    }

    #[test]
    fn textbook_key_schedule() {
        // 1010000010 → k1 = 10100100, k2 = 01000011
        let subkeys = key_schedule(key(0b10_1000_0010));
        assert_eq!(subkeys, SubKeys { k1: 0b1010_0100, k2: 0b0100_0011 });
    }

    #[test]
    fn all_ones_key_yields_all_ones_subkeys() {
        assert_eq!(key_schedule(key(1023)), SubKeys { k1: 0xFF, k2: 0xFF });
    }

    #[test]
    fn rotate_halves_wraps_each_half() {
        assert_eq!(rotate_halves(0b10000_10000), 0b00001_00001);
        assert_eq!(rotate_halves(0b00001_11110), 0b00010_11101);
    }

    #[test]
    fn five_rotations_are_identity() {
        let value = 0b10110_01101;
        let rotated = (0..HALF_BITS).fold(value, |bits, _| rotate_halves(bits));
        assert_eq!(rotated, value);
    }

    #[test]
    fn select_bits_applies_p10() {
        // Single bit at position 1 lands wherever P10 references position 1.
        let out = select_bits(0b10_0000_0000, KEY_BITS, &P10);
        assert_eq!(out, 0b00_0000_1000);
    }
}
