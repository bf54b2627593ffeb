//! Fuzz target for the block cipher and message framing
//!
//! # Strategy
//!
//! - Arbitrary 16-bit key material (most of it out of range)
//! - Single and triple modes
//! - Arbitrary block sequences and Latin-1 text
//!
//! # Invariants
//!
//! - Keys above 1023 and blocks above 255 are rejected, never truncated
//! - decrypt(encrypt(x)) == x for every block and mode
//! - Text sealed by a cipher opens to the same text

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_crypto::{CipherKey, MessageCipher};

#[derive(Debug, Clone, Arbitrary)]
struct CipherScenario {
    key1: u16,
    key2: u16,
    triple: bool,
    raw_block: u32,
    blocks: Vec<u8>,
}

fuzz_target!(|scenario: CipherScenario| {
    let (Ok(key1), Ok(key2)) = (CipherKey::new(scenario.key1), CipherKey::new(scenario.key2)) else {
        assert!(scenario.key1 > CipherKey::MAX || scenario.key2 > CipherKey::MAX);
        return;
    };

    let cipher = if scenario.triple {
        MessageCipher::Triple(key1, key2)
    } else {
        MessageCipher::Single(key1)
    };

    match cipher.encrypt_value(scenario.raw_block) {
        Ok(block) => assert_eq!(cipher.decrypt(block), scenario.raw_block as u8),
        Err(_) => assert!(scenario.raw_block > 255),
    }

    let sealed = cipher.encrypt_blocks(&scenario.blocks);
    assert_eq!(sealed.len(), scenario.blocks.len());
    assert_eq!(cipher.decrypt_blocks(&sealed), scenario.blocks);

    let text: String = scenario.blocks.iter().map(|&b| char::from(b)).collect();
    let Ok(wire) = cipher.encrypt_text(&text) else {
        unreachable!("Latin-1 text must always encrypt");
    };
    assert_eq!(cipher.decrypt_text(&wire).ok(), Some(text));
});
