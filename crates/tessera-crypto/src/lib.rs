//! Tessera Block Cipher
//!
//! A compact Feistel cipher over 8-bit blocks with a 10-bit key, plus the
//! encrypt-decrypt-encrypt triple composition and the text framing used to
//! move messages through a Tessera channel. Every operation is a pure function
//! of its inputs; the engine holds no state between calls.
//!
//! # Data Flow
//!
//! ```text
//! 10-bit CipherKey
//!        │
//!        ▼ P10 → rotate halves → P8
//! SubKeys (k1, k2)
//!        │
//!        ▼
//! IP → fk(k1) → swap → fk(k2) → FP
//!        │
//!        ▼
//! 8-bit ciphertext block
//! ```
//!
//! Decryption runs the same network with the subkeys in reverse order.
//!
//! # Security
//!
//! None. The block is 8 bits and the key space is 1024 values, so every key
//! can be searched exhaustively. The cipher exists for teaching and for
//! interoperating with existing test vectors.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod error;
pub mod framing;

pub use block::{
    CipherKey, KEY_BITS, SubKeys, decrypt_block, encrypt_block, key_schedule, permute,
    triple_decrypt, triple_encrypt,
};
pub use error::{CipherError, ErrorKind};
pub use framing::{
    MessageCipher, bit_string_to_blocks, blocks_to_bit_string, blocks_to_text, text_to_blocks,
};
