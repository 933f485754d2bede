//! JSON-facing request/response types and thin wrappers around the core
//! crypto modules, shared by the C FFI, UniFFI, and WASM surfaces.
//!
//! Secret-holding core types (`EcdhePrivateKey`, `ChannelKeys`, ...)
//! deliberately do not derive `Serialize`/`Deserialize` — handing a key
//! pair's lifetime management to a caller across a language boundary means
//! its bytes must cross as plain base64, with no zeroizing wrapper able to
//! track the copy. This module is the one place that boundary is crossed;
//! everything below it works with zeroizing types, everything above it
//! works with JSON.

use serde::{Deserialize, Serialize};

use crate::channel_keys::N_CHANNELS;
use crate::error::{CoreError, CoreResult};
use crate::keypair::{ecdh_shared_secret, EcdhePublicKey, KeyPair};
use crate::kdf::derive_session_keys;
use crate::legacy_password::translate_password;
use crate::primitives::{aead, base64};
use crate::random::OsRandom;
use crate::srp_verifier::SrpVerifierStore;

fn decode_fixed<const N: usize>(field: &str, encoded: &str) -> CoreResult<[u8; N]> {
    if !base64::is_valid(encoded) {
        return Err(CoreError::InvalidParameters(format!("{field}: not valid base64")));
    }
    let bytes = base64::decode(encoded);
    bytes
        .try_into()
        .map_err(|_| CoreError::InvalidParameters(format!("{field}: expected {N} bytes")))
}

/// A freshly generated ephemeral key pair, as base64.
#[derive(Serialize, Deserialize)]
pub struct KeypairResponse {
    pub private_key: String,
    pub public_key: String,
}

pub fn generate_keypair() -> CoreResult<KeypairResponse> {
    let keypair = KeyPair::generate_ephemeral(&OsRandom)?;
    Ok(KeypairResponse {
        private_key: base64::encode(keypair.private_key_bytes()),
        public_key: base64::encode(keypair.public_key().as_bytes()),
    })
}

#[derive(Serialize)]
pub struct SessionKeysResponse {
    pub client_send: Vec<String>,
    pub server_send: Vec<String>,
    pub handshake_digest: String,
}

pub fn derive_session_keys_json(
    local_private_key: &str,
    peer_public_key: &str,
) -> CoreResult<SessionKeysResponse> {
    let private_bytes: [u8; 32] = decode_fixed("local_private_key", local_private_key)?;
    let peer_bytes: [u8; 32] = decode_fixed("peer_public_key", peer_public_key)?;

    let local = KeyPair::from_private_bytes(private_bytes);
    let peer = EcdhePublicKey::from_bytes(peer_bytes);

    let keys = derive_session_keys(&local, &peer)?;

    Ok(SessionKeysResponse {
        client_send: keys
            .channel_keys
            .client_send
            .iter()
            .map(|k| base64::encode(k))
            .collect(),
        server_send: keys
            .channel_keys
            .server_send
            .iter()
            .map(|k| base64::encode(k))
            .collect(),
        handshake_digest: base64::encode(keys.handshake_digest.as_bytes()),
    })
}

pub fn seal_packet(key: &str, nonce: &str, plaintext: &str) -> CoreResult<String> {
    let key: [u8; aead::KEY_LEN] = decode_fixed("key", key)?;
    let nonce: [u8; aead::NONCE_LEN] = decode_fixed("nonce", nonce)?;
    let plaintext = if base64::is_valid(plaintext) {
        base64::decode(plaintext)
    } else {
        return Err(CoreError::InvalidParameters("plaintext: not valid base64".into()));
    };

    let mut out = vec![0u8; plaintext.len() + aead::TAG_LEN];
    aead::seal(&key, &nonce, &plaintext, &mut out)?;
    Ok(base64::encode(&out))
}

pub fn open_packet(key: &str, nonce: &str, ciphertext: &str) -> CoreResult<String> {
    let key: [u8; aead::KEY_LEN] = decode_fixed("key", key)?;
    let nonce: [u8; aead::NONCE_LEN] = decode_fixed("nonce", nonce)?;
    if !base64::is_valid(ciphertext) {
        return Err(CoreError::InvalidParameters("ciphertext: not valid base64".into()));
    }
    let mut buf = base64::decode(ciphertext);

    let plaintext_len = aead::open_in_place(&key, &nonce, &mut buf)?;
    buf.truncate(plaintext_len);
    Ok(base64::encode(&buf))
}

#[derive(Serialize)]
pub struct SrpVerifierParts {
    pub verifier: String,
    pub salt: String,
}

pub fn generate_srp_verifier_record(name: &str, password: &str) -> CoreResult<String> {
    SrpVerifierStore::get_encoded(name, password, &OsRandom)
}

pub fn parse_srp_verifier_record(encoded: &str) -> CoreResult<SrpVerifierParts> {
    let (verifier, salt) = SrpVerifierStore::decode(encoded)?;
    Ok(SrpVerifierParts {
        verifier: base64::encode(&verifier),
        salt: base64::encode(&salt),
    })
}

pub fn translate_legacy_password(name: &str, password: &str) -> String {
    translate_password(name, password)
}
