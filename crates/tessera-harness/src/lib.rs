//! Deterministic simulation harness for Tessera channels.
//!
//! Seeded implementations of the Environment trait and simulated peers that
//! run the full key agreement without a transport. Public keys are passed by
//! value between peers, standing in for whatever carries them in a real
//! deployment.
//!
//! # Example Flow
//!
//! ```text
//! ParameterGenerator ─▶ GroupParameters
//!                           │
//!             ┌─────────────┴─────────────┐
//!             ▼                           ▼
//!   SimPeer::join("alice")      SimPeer::join("bob")
//!             └──────── handshake ────────┘
//!                           │
//!                 (SecureChannel, SecureChannel)
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod peer;
pub mod sim_env;

pub use error::HarnessError;
pub use peer::{SecureChannel, SimPeer, handshake};
pub use sim_env::SeededEnv;
