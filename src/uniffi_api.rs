//! UniFFI API module for Swift and Kotlin bindings.
//!
//! Exposes the session crypto core via UniFFI for mobile platforms. Key
//! material crosses as base64-encoded strings; see `crate::api` for the
//! rationale.

use crate::api;
use crate::error::CoreError;

/// Generate a fresh ephemeral X25519 key pair.
///
/// # Returns
/// JSON string with format:
///   ```json
///   {"private_key": "<base64>", "public_key": "<base64>"}
///   ```
#[uniffi::export]
pub fn generate_keypair() -> Result<String, CoreError> {
    let response = api::generate_keypair()?;
    serde_json::to_string(&response)
        .map_err(|e| CoreError::PrimitiveFailure(e.to_string()))
}

/// Derive per-channel AEAD keys and the SRP handshake-binding digest from
/// a local private key and a peer's public key (both base64).
///
/// # Returns
/// JSON string with format:
///   ```json
///   {"client_send": ["<base64>", ...], "server_send": ["<base64>", ...], "handshake_digest": "<base64>"}
///   ```
#[uniffi::export]
pub fn derive_session_keys(local_private_key: String, peer_public_key: String) -> Result<String, CoreError> {
    let response = api::derive_session_keys_json(&local_private_key, &peer_public_key)?;
    serde_json::to_string(&response)
        .map_err(|e| CoreError::PrimitiveFailure(e.to_string()))
}

/// Seal a plaintext packet (base64 in, base64 out) with AES-128-GCM.
#[uniffi::export]
pub fn seal_packet(key: String, nonce: String, plaintext: String) -> Result<String, CoreError> {
    api::seal_packet(&key, &nonce, &plaintext)
}

/// Open a sealed packet (base64 in, base64 out). Returns an error if
/// authentication fails; the caller must drop the packet in that case.
#[uniffi::export]
pub fn open_packet(key: String, nonce: String, ciphertext: String) -> Result<String, CoreError> {
    api::open_packet(&key, &nonce, &ciphertext)
}

/// Generate a new SRP-6a verifier record for `(name, password)`, with a
/// fresh random salt, in `"#1#<salt>#<verifier>"` form.
#[uniffi::export]
pub fn generate_srp_verifier_record(name: String, password: String) -> Result<String, CoreError> {
    api::generate_srp_verifier_record(&name, &password)
}

/// Parse an SRP verifier record into its base64 `(verifier, salt)` parts.
///
/// # Returns
/// JSON string with format:
///   ```json
///   {"verifier": "<base64>", "salt": "<base64>"}
///   ```
#[uniffi::export]
pub fn parse_srp_verifier_record(encoded: String) -> Result<String, CoreError> {
    let parts = api::parse_srp_verifier_record(&encoded)?;
    serde_json::to_string(&parts).map_err(|e| CoreError::PrimitiveFailure(e.to_string()))
}

/// Translate a legacy SHA-1 password hash for account migration.
#[uniffi::export]
pub fn translate_legacy_password(name: String, password: String) -> String {
    api::translate_legacy_password(&name, &password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keypair() {
        let result = generate_keypair();
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert!(value["private_key"].is_string());
        assert!(value["public_key"].is_string());
    }

    #[test]
    fn test_session_key_agreement() {
        let a = generate_keypair().unwrap();
        let b = generate_keypair().unwrap();
        let a: serde_json::Value = serde_json::from_str(&a).unwrap();
        let b: serde_json::Value = serde_json::from_str(&b).unwrap();

        let from_a = derive_session_keys(
            a["private_key"].as_str().unwrap().to_string(),
            b["public_key"].as_str().unwrap().to_string(),
        )
        .unwrap();
        let from_b = derive_session_keys(
            b["private_key"].as_str().unwrap().to_string(),
            a["public_key"].as_str().unwrap().to_string(),
        )
        .unwrap();
        assert_eq!(from_a, from_b);
    }

    #[test]
    fn test_translate_legacy_password() {
        assert_eq!(
            translate_legacy_password("alice".to_string(), "hunter2".to_string()),
            "CLCnCpbf/afl3abdeKmVh8jgT6g="
        );
    }

    #[test]
    fn test_srp_verifier_round_trip() {
        let encoded =
            generate_srp_verifier_record("alice".to_string(), "hunter2".to_string()).unwrap();
        let parsed = parse_srp_verifier_record(encoded).unwrap();
        let value: serde_json::Value = serde_json::from_str(&parsed).unwrap();
        assert!(value["verifier"].is_string());
        assert!(value["salt"].is_string());
    }
}
