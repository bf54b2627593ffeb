//! Text framing for channel messages
//!
//! A message travels as one 8-bit block per character. On the wire the
//! blocks are written as a single string of zero-padded 8-digit binary
//! numbers, so `"Hi"` becomes `"0100100001101001"`.
//!
//! Only characters up to U+00FF fit in a block; the mapping between blocks
//! and characters is Latin-1.

use crate::{
    block::{CipherKey, decrypt_block, encrypt_block, triple_decrypt, triple_encrypt},
    error::CipherError,
};

/// Number of binary digits per block on the wire
const BLOCK_DIGITS: usize = 8;

/// Convert text into blocks, one per character.
///
/// # Errors
///
/// - `InvalidCharacter`: if a character is above U+00FF
pub fn text_to_blocks(text: &str) -> Result<Vec<u8>, CipherError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| CipherError::InvalidCharacter { ch, position })
        })
        .collect()
}

/// Convert blocks back into text.
pub fn blocks_to_text(blocks: &[u8]) -> String {
    blocks.iter().map(|&b| char::from(b)).collect()
}

/// Narrow an integer to a block.
fn to_block(value: u32) -> Result<u8, CipherError> {
    u8::try_from(value).map_err(|_| CipherError::InvalidBlock { value })
}

/// Render blocks as concatenated 8-digit binary strings.
pub fn blocks_to_bit_string(blocks: &[u8]) -> String {
    blocks.iter().map(|b| format!("{b:08b}")).collect()
}

/// Parse a string produced by [`blocks_to_bit_string`].
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - `InvalidBitString`: if the length is not a multiple of 8 or a
///   character other than `0` or `1` appears
pub fn bit_string_to_blocks(bits: &str) -> Result<Vec<u8>, CipherError> {
    let bits = bits.trim();

    if let Some((position, ch)) = bits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
        return Err(CipherError::InvalidBitString {
            reason: format!("unexpected {ch:?} at byte offset {position}"),
        });
    }

    // Only ASCII digits remain, so byte length equals digit count.
    if bits.len() % BLOCK_DIGITS != 0 {
        return Err(CipherError::InvalidBitString {
            reason: format!("length {} is not a multiple of {BLOCK_DIGITS}", bits.len()),
        });
    }

    Ok(bits
        .as_bytes()
        .chunks_exact(BLOCK_DIGITS)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &digit| (acc << 1) | (digit - b'0')))
        .collect())
}

/// Cipher configuration for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCipher {
    /// One key, one pass of the block cipher
    Single(CipherKey),
    /// Two keys, encrypt-decrypt-encrypt
    Triple(CipherKey, CipherKey),
}

impl MessageCipher {
    /// Encrypt one block.
    pub fn encrypt(&self, block: u8) -> u8 {
        match *self {
            Self::Single(key) => encrypt_block(key, block),
            Self::Triple(key1, key2) => triple_encrypt(key1, key2, block),
        }
    }

    /// Decrypt one block.
    pub fn decrypt(&self, block: u8) -> u8 {
        match *self {
            Self::Single(key) => decrypt_block(key, block),
            Self::Triple(key1, key2) => triple_decrypt(key1, key2, block),
        }
    }

    /// Encrypt a block given as a plain integer.
    ///
    /// For callers holding block values wider than `u8`, such as values read
    /// from a table or typed in by a user.
    ///
    /// # Errors
    ///
    /// - `InvalidBlock`: if `value` is above 255
    pub fn encrypt_value(&self, value: u32) -> Result<u8, CipherError> {
        Ok(self.encrypt(to_block(value)?))
    }

    /// Decrypt a block given as a plain integer.
    ///
    /// # Errors
    ///
    /// - `InvalidBlock`: if `value` is above 255
    pub fn decrypt_value(&self, value: u32) -> Result<u8, CipherError> {
        Ok(self.decrypt(to_block(value)?))
    }

    /// Encrypt a sequence of blocks independently.
    pub fn encrypt_blocks(&self, blocks: &[u8]) -> Vec<u8> {
        blocks.iter().map(|&b| self.encrypt(b)).collect()
    }

    /// Decrypt a sequence of blocks independently.
    pub fn decrypt_blocks(&self, blocks: &[u8]) -> Vec<u8> {
        blocks.iter().map(|&b| self.decrypt(b)).collect()
    }

    /// Encrypt text into its wire form.
    ///
    /// # Errors
    ///
    /// - `InvalidCharacter`: if the text has a character above U+00FF
    pub fn encrypt_text(&self, text: &str) -> Result<String, CipherError> {
        let blocks = text_to_blocks(text)?;
        Ok(blocks_to_bit_string(&self.encrypt_blocks(&blocks)))
    }

    /// Decrypt a wire string back into text.
    ///
    /// # Errors
    ///
    /// - `InvalidBitString`: if `wire` is not a valid bit string
    pub fn decrypt_text(&self, wire: &str) -> Result<String, CipherError> {
        let blocks = bit_string_to_blocks(wire)?;
        Ok(blocks_to_text(&self.decrypt_blocks(&blocks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: u16) -> CipherKey {
        CipherKey::new(value).unwrap()
    }

    #[test]
    fn text_to_blocks_uses_latin1() {
        assert_eq!(text_to_blocks("Hi").unwrap(), vec![0x48, 0x69]);
        assert_eq!(text_to_blocks("ÿ").unwrap(), vec![0xFF]);
    }

    #[test]
    fn text_to_blocks_rejects_wide_characters() {
        let err = text_to_blocks("ok€").unwrap_err();
        assert_eq!(err, CipherError::InvalidCharacter { ch: '€', position: 2 });
    }

    #[test]
    fn empty_text_is_empty_message() {
        assert!(text_to_blocks("").unwrap().is_empty());
        assert_eq!(blocks_to_bit_string(&[]), "");
        assert!(bit_string_to_blocks("").unwrap().is_empty());
    }

    #[test]
    fn bit_string_is_zero_padded() {
        assert_eq!(blocks_to_bit_string(&[0x48, 0x69]), "0100100001101001");
        assert_eq!(blocks_to_bit_string(&[1]), "00000001");
    }

    #[test]
    fn bit_string_parses_back() {
        assert_eq!(bit_string_to_blocks("0100100001101001").unwrap(), vec![0x48, 0x69]);
        assert_eq!(bit_string_to_blocks("  11111111\n").unwrap(), vec![0xFF]);
    }

    #[test]
    fn bit_string_rejects_partial_block() {
        let result = bit_string_to_blocks("0101");
        assert!(matches!(result, Err(CipherError::InvalidBitString { .. })));
    }

    #[test]
    fn bit_string_rejects_non_binary() {
        let result = bit_string_to_blocks("01020101");
        assert!(matches!(result, Err(CipherError::InvalidBitString { .. })));

        let result = bit_string_to_blocks("0101 0101");
        assert!(matches!(result, Err(CipherError::InvalidBitString { .. })));
    }

    #[test]
    fn integer_blocks_are_range_checked() {
        let cipher = MessageCipher::Single(key(0b10_0010_0101));
        assert_eq!(cipher.encrypt_value(0x48).unwrap(), 230);
        assert_eq!(cipher.decrypt_value(230).unwrap(), 0x48);
        assert_eq!(cipher.encrypt_value(255).unwrap(), cipher.encrypt(255));

        let err = cipher.encrypt_value(256).unwrap_err();
        assert_eq!(err, CipherError::InvalidBlock { value: 256 });
        assert_eq!(
            cipher.decrypt_value(u32::MAX).unwrap_err(),
            CipherError::InvalidBlock { value: u32::MAX }
        );
    }

    #[test]
    fn single_cipher_matches_block_engine() {
        let cipher = MessageCipher::Single(key(0b10_0010_0101));
        assert_eq!(cipher.encrypt_blocks(b"Hi"), vec![230, 69]);
    }

    #[test]
    fn single_cipher_text_roundtrip() {
        let cipher = MessageCipher::Single(key(0b10_0010_0101));
        let wire = cipher.encrypt_text("Hello, Bob").unwrap();

        assert_eq!(wire.len(), 10 * 8);
        assert_eq!(cipher.decrypt_text(&wire).unwrap(), "Hello, Bob");
    }

    #[test]
    fn triple_cipher_text_roundtrip() {
        let cipher = MessageCipher::Triple(key(0b10_0010_1110), key(0b01_1010_1110));
        let wire = cipher.encrypt_text("attack at dawn").unwrap();
        assert_eq!(cipher.decrypt_text(&wire).unwrap(), "attack at dawn");
    }

    #[test]
    fn wrong_key_does_not_decrypt() {
        let sender = MessageCipher::Single(key(0b10_0010_0101));
        let receiver = MessageCipher::Single(key(0b10_0010_0100));
        let wire = sender.encrypt_text("secret message").unwrap();
        assert_ne!(receiver.decrypt_text(&wire).unwrap(), "secret message");
    }
}
