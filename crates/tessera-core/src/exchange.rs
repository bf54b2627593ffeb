//! Diffie-Hellman key agreement and key-bit derivation
//!
//! ```text
//! Alice                                   Bob
//!   a ∈ [1, p-1]                            b ∈ [1, p-1]
//!   A = g^a mod p ─────── A ──────▶
//!                 ◀────── B ─────────       B = g^b mod p
//!   s = B^a mod p                           s = A^b mod p
//!        │                                       │
//!        ▼ x = s² mod m, then x = x² mod m, emit x & 1
//!   10 key bits                             10 key bits
//! ```
//!
//! Moving public keys between the parties is the caller's job.

use std::{collections::HashSet, fmt};

use tessera_crypto::{CipherKey, KEY_BITS};
use tracing::trace;
use zeroize::Zeroize;

use crate::{
    arith::{mod_pow, mul_mod},
    env::Environment,
    error::ExchangeError,
    group::GroupParameters,
};

/// Number of key bits derived for a cipher key
pub const DEFAULT_KEY_BITS: usize = KEY_BITS;

/// Maximum private-key draws before giving up on an exclusion set.
pub const MAX_KEY_DRAWS: u32 = 1000;

/// A Diffie-Hellman key pair.
///
/// The private half is zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: u64,
    private: u64,
}

impl KeyPair {
    /// Public key `g^private mod p`, safe to send to the peer.
    pub fn public(&self) -> u64 {
        self.public
    }

    /// Private exponent in `[1, p - 1]`.
    pub fn private(&self) -> u64 {
        self.private
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("private", &"<redacted>")
            .finish()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private.zeroize();
    }
}

/// Bits produced by the quadratic-residue generator.
///
/// Zeroized on drop. `Debug` shows only the length; use `Display` to render
/// the bits deliberately.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKeyBits(Vec<u8>);

impl DerivedKeyBits {
    /// The bits in generation order, each 0 or 1.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bits were generated (never true for derived output).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold the bits into a cipher key, first bit most significant.
    ///
    /// # Errors
    ///
    /// - `Cipher`: if the value does not fit in a 10-bit key
    pub fn to_cipher_key(&self) -> Result<CipherKey, ExchangeError> {
        Ok(CipherKey::from_bits(&self.0)?)
    }
}

impl fmt::Debug for DerivedKeyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeyBits")
            .field("len", &self.0.len())
            .field("bits", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for DerivedKeyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|bit| write!(f, "{bit}"))
    }
}

impl Drop for DerivedKeyBits {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// One party's view of a key exchange over fixed group parameters.
///
/// Owns its parameters and randomness source; sessions share nothing.
#[derive(Debug, Clone)]
pub struct KeyExchange<E> {
    params: GroupParameters,
    env: E,
}

impl<E: Environment> KeyExchange<E> {
    /// Start a session over `params`, drawing randomness from `env`.
    pub fn new(params: GroupParameters, env: E) -> Self {
        Self { params, env }
    }

    /// Group parameters for this session.
    pub fn params(&self) -> &GroupParameters {
        &self.params
    }

    /// Draw a fresh key pair whose private key is not in `exclude`.
    ///
    /// The private key is uniform over `[1, p - 1]` minus the exclusions.
    ///
    /// # Errors
    ///
    /// - `KeySpaceExhausted`: if `exclude` covers the whole key space, or
    ///   [`MAX_KEY_DRAWS`] consecutive draws all hit it
    pub fn generate_key_pair(&self, exclude: &HashSet<u64>) -> Result<KeyPair, ExchangeError> {
        let space = self.params.key_space();
        let excluded = exclude.iter().filter(|&&k| (1..=space).contains(&k)).count() as u64;
        if excluded >= space {
            return Err(ExchangeError::KeySpaceExhausted { excluded, space, attempts: 0 });
        }

        for attempt in 1..=MAX_KEY_DRAWS {
            let private = self.env.random_in_range(1, space);
            if exclude.contains(&private) {
                trace!(attempt, "private key draw hit exclusion set");
                continue;
            }

            let public = mod_pow(self.params.g(), private, self.params.p());
            return Ok(KeyPair { public, private });
        }

        Err(ExchangeError::KeySpaceExhausted { excluded, space, attempts: MAX_KEY_DRAWS })
    }

    /// Combine the peer's public key with our private key.
    ///
    /// Both parties arrive at the same value.
    ///
    /// # Errors
    ///
    /// - `InvalidPublicKey`: if `peer_public` is outside `[1, p - 1]`
    /// - `InvalidPrivateKey`: if `private` is outside `[1, p - 1]`
    pub fn compute_shared_secret(
        &self,
        peer_public: u64,
        private: u64,
    ) -> Result<u64, ExchangeError> {
        let max = self.params.key_space();
        if !(1..=max).contains(&peer_public) {
            return Err(ExchangeError::InvalidPublicKey { value: peer_public, max });
        }
        if !(1..=max).contains(&private) {
            return Err(ExchangeError::InvalidPrivateKey { max });
        }

        Ok(mod_pow(peer_public, private, self.params.p()))
    }

    /// Stretch `seed` into `count` pseudorandom bits.
    ///
    /// Blum-Blum-Shub style: `x = seed² mod m`, then `count` times square
    /// `x` modulo `m` and emit its least significant bit. Deterministic in
    /// `(seed, m, count)`.
    ///
    /// # Errors
    ///
    /// - `InvalidBitCount`: if `count` is zero
    pub fn derive_key_bits(
        &self,
        seed: u64,
        count: usize,
    ) -> Result<DerivedKeyBits, ExchangeError> {
        if count == 0 {
            return Err(ExchangeError::InvalidBitCount);
        }

        let m = self.params.m();
        let mut x = mul_mod(seed, seed, m);
        let bits = (0..count)
            .map(|_| {
                x = mul_mod(x, x, m);
                u8::from(x & 1 == 1)
            })
            .collect();
        x.zeroize();

        Ok(DerivedKeyBits(bits))
    }

    /// Derive a 10-bit cipher key from a shared secret.
    ///
    /// # Errors
    ///
    /// - `Cipher`: never for the default bit count, kept for the conversion
    pub fn derive_cipher_key(&self, shared_secret: u64) -> Result<CipherKey, ExchangeError> {
        self.derive_key_bits(shared_secret, DEFAULT_KEY_BITS)?.to_cipher_key()
    }
}
