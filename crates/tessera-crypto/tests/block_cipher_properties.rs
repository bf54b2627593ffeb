//! Property-based tests for the block cipher
//!
//! These tests verify the fundamental invariants of the cipher:
//!
//! 1. **Round-trip**: decrypt(encrypt(p)) == p for every key and block
//! 2. **Triple round-trip**: the EDE composition inverts for every key pair
//! 3. **Bijectivity**: each key permutes the 256 blocks
//! 4. **Framing**: wire strings decode to the text that produced them

use proptest::prelude::*;
use tessera_crypto::{
    CipherKey, MessageCipher, bit_string_to_blocks, blocks_to_bit_string, decrypt_block,
    encrypt_block, triple_decrypt, triple_encrypt,
};

fn any_key() -> impl Strategy<Value = CipherKey> {
    (0u16..=CipherKey::MAX).prop_map(|v| CipherKey::new(v).unwrap())
}

#[test]
fn exhaustive_single_roundtrip() {
    for value in 0..=CipherKey::MAX {
        let key = CipherKey::new(value).unwrap();
        for block in 0..=u8::MAX {
            let ciphertext = encrypt_block(key, block);
            assert_eq!(
                decrypt_block(key, ciphertext),
                block,
                "round trip failed for key {value:#012b}, block {block:#010b}"
            );
        }
    }
}

#[test]
fn every_key_is_a_permutation_of_blocks() {
    for value in 0..=CipherKey::MAX {
        let key = CipherKey::new(value).unwrap();
        let mut seen = [false; 256];
        for block in 0..=u8::MAX {
            seen[usize::from(encrypt_block(key, block))] = true;
        }
        assert!(seen.iter().all(|&s| s), "key {value} is not a bijection");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_triple_roundtrip_all_blocks(key1 in any_key(), key2 in any_key()) {
        for block in 0..=u8::MAX {
            let ciphertext = triple_encrypt(key1, key2, block);
            prop_assert_eq!(triple_decrypt(key1, key2, ciphertext), block);
        }
    }

    #[test]
    fn prop_decrypt_then_encrypt_is_identity(key in any_key(), block in any::<u8>()) {
        prop_assert_eq!(encrypt_block(key, decrypt_block(key, block)), block);
    }

    #[test]
    fn prop_bit_string_roundtrip(blocks in prop::collection::vec(any::<u8>(), 0..64)) {
        let wire = blocks_to_bit_string(&blocks);
        prop_assert_eq!(wire.len(), blocks.len() * 8);
        prop_assert_eq!(bit_string_to_blocks(&wire).unwrap(), blocks);
    }

    #[test]
    fn prop_text_roundtrip(
        text in "[\\x00-\\xFF]{0,40}",
        key1 in any_key(),
        key2 in any_key(),
    ) {
        for cipher in [MessageCipher::Single(key1), MessageCipher::Triple(key1, key2)] {
            let wire = cipher.encrypt_text(&text).unwrap();
            prop_assert_eq!(cipher.decrypt_text(&wire).unwrap(), text.clone());
        }
    }

    #[test]
    fn prop_bit_string_decoder_never_panics(input in "[01 a]{0,40}") {
        let _ = bit_string_to_blocks(&input);
    }
}
