//! WASM bindings for browser/JS hosts.

use wasm_bindgen::prelude::*;

use crate::api;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Generate a fresh ephemeral X25519 key pair.
///
/// Returns a JsValue of `{privateKey, publicKey}` (base64).
#[wasm_bindgen(js_name = generateKeypair)]
pub fn generate_keypair_js() -> Result<JsValue, JsValue> {
    let response = api::generate_keypair().map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

/// Derive per-channel AEAD keys and the SRP handshake digest.
///
/// Takes base64 `localPrivateKey`/`peerPublicKey`; returns a JsValue of
/// `{clientSend, serverSend, handshakeDigest}`.
#[wasm_bindgen(js_name = deriveSessionKeys)]
pub fn derive_session_keys_js(local_private_key: &str, peer_public_key: &str) -> Result<JsValue, JsValue> {
    let response = api::derive_session_keys_json(local_private_key, peer_public_key).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

/// Seal a plaintext packet (base64 in, base64 out).
#[wasm_bindgen(js_name = sealPacket)]
pub fn seal_packet_js(key: &str, nonce: &str, plaintext: &str) -> Result<String, JsValue> {
    api::seal_packet(key, nonce, plaintext).map_err(to_js_error)
}

/// Open a sealed packet (base64 in, base64 out).
#[wasm_bindgen(js_name = openPacket)]
pub fn open_packet_js(key: &str, nonce: &str, ciphertext: &str) -> Result<String, JsValue> {
    api::open_packet(key, nonce, ciphertext).map_err(to_js_error)
}

/// Generate a new SRP-6a verifier record for `(name, password)`.
#[wasm_bindgen(js_name = generateSrpVerifierRecord)]
pub fn generate_srp_verifier_record_js(name: &str, password: &str) -> Result<String, JsValue> {
    api::generate_srp_verifier_record(name, password).map_err(to_js_error)
}

/// Parse an SRP verifier record into its base64 `(verifier, salt)` parts.
#[wasm_bindgen(js_name = parseSrpVerifierRecord)]
pub fn parse_srp_verifier_record_js(encoded: &str) -> Result<JsValue, JsValue> {
    let parts = api::parse_srp_verifier_record(encoded).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&parts).map_err(to_js_error)
}

/// Translate a legacy SHA-1 password hash, for migrating old accounts.
#[wasm_bindgen(js_name = translateLegacyPassword)]
pub fn translate_legacy_password_js(name: &str, password: &str) -> String {
    api::translate_legacy_password(name, password)
}
