//! Simulated channel endpoints.
//!
//! A `SimPeer` stands in for one side of a conversation: it holds a key
//! exchange session and its key pair. [`handshake`] plays the public-key swap
//! that a real transport would carry and hands each side a
//! [`SecureChannel`].

use std::collections::HashSet;

use tessera_core::{Environment, GroupParameters, KeyExchange, KeyPair};
use tessera_crypto::{CipherKey, MessageCipher};
use tracing::{debug, info};

use crate::{error::HarnessError, sim_env::SeededEnv};

/// One party in a simulated exchange.
#[derive(Debug)]
pub struct SimPeer<E = SeededEnv> {
    name: String,
    exchange: KeyExchange<E>,
    key_pair: KeyPair,
}

impl<E: Environment> SimPeer<E> {
    /// Join an exchange over `params`, avoiding private keys in `taken`.
    ///
    /// # Errors
    ///
    /// - `Exchange`: if no private key outside `taken` can be drawn
    pub fn join(
        name: impl Into<String>,
        params: GroupParameters,
        env: E,
        taken: &HashSet<u64>,
    ) -> Result<Self, HarnessError> {
        let name = name.into();
        let exchange = KeyExchange::new(params, env);
        let key_pair = exchange.generate_key_pair(taken)?;

        debug!(peer = %name, public = key_pair.public(), "peer joined");

        Ok(Self { name, exchange, key_pair })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Public key to hand to the other side.
    pub fn public_key(&self) -> u64 {
        self.key_pair.public()
    }

    /// Full key pair.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Key exchange session.
    pub fn exchange(&self) -> &KeyExchange<E> {
        &self.exchange
    }

    /// Derive the channel key from the peer's public key.
    ///
    /// # Errors
    ///
    /// - `Exchange`: if `peer_public` is outside the group
    pub fn derive_key(&self, peer_public: u64) -> Result<CipherKey, HarnessError> {
        let secret = self.exchange.compute_shared_secret(peer_public, self.key_pair.private())?;
        Ok(self.exchange.derive_cipher_key(secret)?)
    }

    /// Open a single-key channel toward the holder of `peer_public`.
    ///
    /// # Errors
    ///
    /// - `Exchange`: if `peer_public` is outside the group
    pub fn open_channel(&self, peer_public: u64) -> Result<SecureChannel, HarnessError> {
        let key = self.derive_key(peer_public)?;
        Ok(SecureChannel::new(MessageCipher::Single(key)))
    }
}

/// Run a full handshake between two peers.
///
/// Each side computes the shared secret from the other's public key and
/// derives its own cipher key. The channels are returned in argument order.
///
/// # Errors
///
/// - `Exchange`: if either side rejects the other's public key
/// - `SecretMismatch`: if the derived keys differ (the peers are on different
///   groups)
pub fn handshake<E: Environment>(
    left: &SimPeer<E>,
    right: &SimPeer<E>,
) -> Result<(SecureChannel, SecureChannel), HarnessError> {
    let left_key = left.derive_key(right.public_key())?;
    let right_key = right.derive_key(left.public_key())?;

    if left_key != right_key {
        return Err(HarnessError::SecretMismatch {
            left: left.name.clone(),
            right: right.name.clone(),
        });
    }

    info!(left = %left.name, right = %right.name, "handshake complete");

    Ok((
        SecureChannel::new(MessageCipher::Single(left_key)),
        SecureChannel::new(MessageCipher::Single(right_key)),
    ))
}

/// An established channel that seals and opens text messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecureChannel {
    cipher: MessageCipher,
}

impl SecureChannel {
    /// Wrap a cipher configuration.
    pub fn new(cipher: MessageCipher) -> Self {
        Self { cipher }
    }

    /// Cipher in use.
    pub fn cipher(&self) -> MessageCipher {
        self.cipher
    }

    /// Encrypt `text` into its wire form.
    ///
    /// # Errors
    ///
    /// - `Cipher`: if the text has characters above U+00FF
    pub fn seal(&self, text: &str) -> Result<String, HarnessError> {
        Ok(self.cipher.encrypt_text(text)?)
    }

    /// Decrypt a wire string.
    ///
    /// # Errors
    ///
    /// - `Cipher`: if `wire` is not a valid bit string
    pub fn open(&self, wire: &str) -> Result<String, HarnessError> {
        Ok(self.cipher.decrypt_text(wire)?)
    }
}
