//! Block encryption and decryption
//!
//! All functions are pure. Keys are validated when a [`CipherKey`] is built
//! and the built-in tables are constant, so only [`permute`] with a
//! caller-supplied table can fail.

use super::{
    key::CipherKey,
    schedule::key_schedule,
    tables::{EP, FP, IP, P4, S0, S1},
};
use crate::error::CipherError;

/// Bits in a block
const BLOCK_BITS: usize = 8;

/// Mask selecting the high nibble of a block
const HIGH_NIBBLE: u8 = 0xF0;

/// Mask selecting the low nibble of a block
const LOW_NIBBLE: u8 = 0x0F;

/// Permute the bits of `byte` according to `table`.
///
/// Output bit `i` (1-indexed from the most significant bit) takes the value
/// of input bit `table[i]`. Tables shorter than eight entries fill only the
/// high bits of the result.
///
/// # Errors
///
/// - `InvalidTable`: if the table has more than eight entries or an entry
///   outside `1..=8`
pub fn permute(byte: u8, table: &[u8]) -> Result<u8, CipherError> {
    if table.len() > BLOCK_BITS {
        return Err(CipherError::InvalidTable {
            reason: format!("{} entries for an {BLOCK_BITS}-bit block", table.len()),
        });
    }
    if let Some(&pos) = table.iter().find(|&&pos| pos == 0 || usize::from(pos) > BLOCK_BITS) {
        return Err(CipherError::InvalidTable {
            reason: format!("bit position {pos} outside 1..={BLOCK_BITS}"),
        });
    }

    Ok(apply_table(byte, table))
}

/// [`permute`] for tables already known to be well formed.
fn apply_table(byte: u8, table: &[u8]) -> u8 {
    table.iter().enumerate().fold(0, |out, (i, &pos)| {
        let bit = (byte >> (BLOCK_BITS - usize::from(pos))) & 1;
        out | (bit << (BLOCK_BITS - 1 - i))
    })
}

/// Exchange the high and low nibbles.
pub fn swap_nibbles(byte: u8) -> u8 {
    byte.rotate_left(4)
}

/// The Feistel function: mixes a subkey into the low nibble of a block.
///
/// The result occupies the high nibble so it can be XORed directly into the
/// left half.
pub fn feistel(subkey: u8, right_nibble: u8) -> u8 {
    let aux = subkey ^ apply_table(swap_nibbles(right_nibble), &EP);

    // Row from the outer bits, column from the inner bits of each half.
    let s0_index =
        ((aux & 0x80) >> 4) | ((aux & 0x40) >> 5) | ((aux & 0x20) >> 5) | ((aux & 0x10) >> 2);
    let s1_index =
        (aux & 0x08) | ((aux & 0x04) >> 1) | ((aux & 0x02) >> 1) | ((aux & 0x01) << 2);

    let sbox_output = swap_nibbles((S0[usize::from(s0_index)] << 2) | S1[usize::from(s1_index)]);
    apply_table(sbox_output, &P4)
}

/// One Feistel round: `(L ^ F(k, R)) || R`.
pub fn round(subkey: u8, data: u8) -> u8 {
    let left = data & HIGH_NIBBLE;
    let right = data & LOW_NIBBLE;
    (left ^ feistel(subkey, right)) | right
}

/// Encrypt one block.
pub fn encrypt_block(key: CipherKey, plaintext: u8) -> u8 {
    let subkeys = key_schedule(key);
    let data = round(subkeys.k1, apply_table(plaintext, &IP));
    apply_table(round(subkeys.k2, swap_nibbles(data)), &FP)
}

/// Decrypt one block; the exact inverse of [`encrypt_block`] under the same
/// key.
pub fn decrypt_block(key: CipherKey, ciphertext: u8) -> u8 {
    let subkeys = key_schedule(key);
    let data = round(subkeys.k2, apply_table(ciphertext, &IP));
    apply_table(round(subkeys.k1, swap_nibbles(data)), &FP)
}

/// Triple encryption: `E(k1, D(k2, E(k1, p)))`.
pub fn triple_encrypt(key1: CipherKey, key2: CipherKey, plaintext: u8) -> u8 {
    let first = encrypt_block(key1, plaintext);
    let second = decrypt_block(key2, first);
    encrypt_block(key1, second)
}

/// Triple decryption: `D(k1, E(k2, D(k1, c)))`.
///
/// Inverts [`triple_encrypt`] for the same key pair.
pub fn triple_decrypt(key1: CipherKey, key2: CipherKey, ciphertext: u8) -> u8 {
    let first = decrypt_block(key1, ciphertext);
    let second = encrypt_block(key2, first);
    decrypt_block(key1, second)
}
