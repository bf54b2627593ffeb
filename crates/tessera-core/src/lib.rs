//! Tessera Key Agreement
//!
//! Group parameter search and Diffie-Hellman key agreement that feed the
//! Tessera block cipher. All computation is synchronous and performs no I/O;
//! randomness comes from an injected [`Environment`].
//!
//! # Session Flow
//!
//! ```text
//! ParameterGenerator::generate()
//!        │  GroupParameters { p, q, g, m }
//!        ▼
//! KeyExchange::new(params, env)
//!        │  generate_key_pair() → exchange public keys out of band
//!        ▼
//! compute_shared_secret(peer_public, private)
//!        │
//!        ▼
//! derive_key_bits(secret, 10) → CipherKey
//!        │
//!        ▼
//! tessera_crypto::encrypt_block / decrypt_block
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns an [`ExchangeError`] whose
//! [`kind`](ExchangeError::kind) is one of `RangeExhausted`, `InvalidInput`
//! or `KeySpaceExhausted`. Nothing is retried or defaulted internally.
//!
//! # Logging
//!
//! Parameter selection and rejected key draws are reported through
//! `tracing`. The crate never installs a subscriber.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arith;
pub mod config;
pub mod env;
pub mod error;
pub mod exchange;
pub mod group;
pub mod system_env;

pub use config::{
    DEFAULT_LOWER, DEFAULT_UPPER, GeneratorStrategy, GroupConfig, MAX_COMPANION_PRIME,
    MAX_EXHAUSTIVE_PRIME,
};
pub use env::Environment;
pub use error::ExchangeError;
pub use exchange::{DEFAULT_KEY_BITS, DerivedKeyBits, KeyExchange, KeyPair, MAX_KEY_DRAWS};
pub use group::{
    ExhaustiveSearch, FactoredOrderSearch, GeneratorSearch, GroupParameters, ParameterGenerator,
    find_safe_prime, is_generator, is_prime,
};
pub use system_env::SystemEnv;
pub use tessera_crypto::ErrorKind;
