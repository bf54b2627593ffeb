//! Fuzz target for bit_string_to_blocks
//!
//! Feeds arbitrary text to the wire decoder to find:
//! - Panics on non-ASCII or multi-byte input
//! - Length checks that accept a partial trailing block
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tessera_crypto::{bit_string_to_blocks, blocks_to_bit_string};

fuzz_target!(|data: &str| {
    if let Ok(blocks) = bit_string_to_blocks(data) {
        // Anything accepted must re-encode to the trimmed input
        assert_eq!(blocks_to_bit_string(&blocks), data.trim());
    }
});
