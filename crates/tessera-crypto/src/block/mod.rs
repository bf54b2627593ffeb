//! Feistel block cipher over 8-bit blocks
//!
//! # Architecture
//!
//! ```text
//! CipherKey (10 bits)
//!        │
//!        ▼ key_schedule
//! SubKeys { k1, k2 }
//!        │
//!        ▼ encrypt_block / decrypt_block
//! IP → round → swap → round → FP
//!        │
//!        ▼ triple_encrypt / triple_decrypt
//! E(k1) ∘ D(k2) ∘ E(k1)
//! ```
//!
//! All permutation and substitution tables live in [`tables`] and are shared
//! read-only by every call.

pub mod engine;
pub mod key;
pub mod schedule;
pub mod tables;

pub use engine::{
    decrypt_block, encrypt_block, feistel, permute, round, swap_nibbles, triple_decrypt,
    triple_encrypt,
};
pub use key::{CipherKey, KEY_BITS};
pub use schedule::{SubKeys, key_schedule};
