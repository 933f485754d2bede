//! Minetest Session Crypto Core
//!
//! Establishes an encrypted, authenticated game session over an unreliable,
//! unordered transport:
//! - **keypair** / **kdf**: ephemeral X25519 key agreement and the HKDF
//!   subkey tree it feeds (per-channel AEAD keys, a handshake-binding
//!   digest).
//! - **aead_channel**: per-channel, per-direction AES-128-GCM packet
//!   sealing and opening.
//! - **handshake**: binds SRP authentication to the ECDH transcript so a
//!   relayed or replayed handshake cannot be authenticated independently.
//! - **srp_verifier**: SRP-6a verifier derivation and its on-disk record
//!   format, for account creation and storage.
//! - **legacy_password**: the historical SHA-1 password hash, kept only to
//!   translate old accounts into SRP verifiers.
//!
//! This library accepts data as JSON at its `api` module boundary and
//! returns results as JSON; each platform (native, browser, mobile) handles
//! its own I/O and calls into this library for the cryptographic core.

pub mod api;
pub mod channel_keys;
pub mod error;
pub mod handshake;
pub mod kdf;
pub mod keypair;
pub mod legacy_password;
pub mod primitives;
pub mod random;
pub mod aead_channel;
pub mod srp_verifier;

pub use channel_keys::{ChannelKeys, N_CHANNELS};
pub use error::{CoreError, CoreResult};
pub use handshake::{make_srp_identity, HandshakeDigest};
pub use kdf::{derive_session_keys, SessionKeys};
pub use keypair::{ecdh_shared_secret, EcdhePrivateKey, EcdhePublicKey, EcdhSharedSecret, KeyPair};
pub use legacy_password::translate_password;
pub use random::{OsRandom, SecureRandom};
pub use srp_verifier::SrpVerifierStore;

// C FFI exports for embedding in the C++ client/server
#[cfg(feature = "ffi")]
pub mod ffi;

// WASM bindings
#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

// UniFFI scaffolding and exports
#[cfg(feature = "uniffi")]
pub mod uniffi_api;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
