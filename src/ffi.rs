//! C FFI exports for .NET P/Invoke and other native hosts.
//!
//! These functions provide a C-compatible interface for calling Rust
//! functions from C#/C++. All functions use JSON strings (or plain C
//! strings for single scalar values) for input/output to simplify
//! marshalling; key material crosses as base64 text, never as raw pointers
//! into zeroizing Rust memory.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::api;

/// Generate a fresh ephemeral X25519 key pair.
///
/// # Safety
///
/// The returned pointer must be freed by calling `free_string`.
///
/// # Returns
///
/// A null-terminated C string containing `{"private_key": ..., "public_key": ...}`,
/// or null on allocation failure.
#[no_mangle]
pub extern "C" fn generate_keypair_ffi() -> *mut c_char {
    match api::generate_keypair() {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(json) => string_to_c_char(json),
            Err(e) => create_error_response(&format!("Failed to serialize output: {}", e)),
        },
        Err(e) => create_error_response(&format!("Key generation failed: {}", e)),
    }
}

/// Derive per-channel AEAD keys and the SRP handshake digest.
///
/// # Safety
///
/// - `local_private_key` and `peer_public_key` must be valid null-terminated C strings
/// - The returned pointer must be freed by calling `free_string`
#[no_mangle]
pub unsafe extern "C" fn derive_session_keys_ffi(
    local_private_key: *const c_char,
    peer_public_key: *const c_char,
) -> *mut c_char {
    let (local_private_key, peer_public_key) = match (
        c_str_arg(local_private_key),
        c_str_arg(peer_public_key),
    ) {
        (Some(a), Some(b)) => (a, b),
        _ => return ptr::null_mut(),
    };

    match api::derive_session_keys_json(local_private_key, peer_public_key) {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(json) => string_to_c_char(json),
            Err(e) => create_error_response(&format!("Failed to serialize output: {}", e)),
        },
        Err(e) => create_error_response(&format!("Key derivation failed: {}", e)),
    }
}

/// Seal a plaintext packet. All arguments and the result are base64.
///
/// # Safety
///
/// All string arguments must be valid null-terminated C strings; the
/// returned pointer must be freed by calling `free_string`.
#[no_mangle]
pub unsafe extern "C" fn seal_packet_ffi(
    key: *const c_char,
    nonce: *const c_char,
    plaintext: *const c_char,
) -> *mut c_char {
    let (key, nonce, plaintext) = match (c_str_arg(key), c_str_arg(nonce), c_str_arg(plaintext)) {
        (Some(k), Some(n), Some(p)) => (k, n, p),
        _ => return ptr::null_mut(),
    };

    match api::seal_packet(key, nonce, plaintext) {
        Ok(ciphertext) => string_to_c_char(ciphertext),
        Err(e) => create_error_response(&format!("Seal failed: {}", e)),
    }
}

/// Open a sealed packet. All arguments and the result are base64.
///
/// # Safety
///
/// All string arguments must be valid null-terminated C strings; the
/// returned pointer must be freed by calling `free_string`.
#[no_mangle]
pub unsafe extern "C" fn open_packet_ffi(
    key: *const c_char,
    nonce: *const c_char,
    ciphertext: *const c_char,
) -> *mut c_char {
    let (key, nonce, ciphertext) = match (c_str_arg(key), c_str_arg(nonce), c_str_arg(ciphertext)) {
        (Some(k), Some(n), Some(c)) => (k, n, c),
        _ => return ptr::null_mut(),
    };

    match api::open_packet(key, nonce, ciphertext) {
        Ok(plaintext) => string_to_c_char(plaintext),
        Err(e) => create_error_response(&format!("Open failed: {}", e)),
    }
}

/// Generate a new SRP-6a verifier record for `(name, password)`.
///
/// # Safety
///
/// `name` and `password` must be valid null-terminated C strings; the
/// returned pointer must be freed by calling `free_string`.
#[no_mangle]
pub unsafe extern "C" fn generate_srp_verifier_record_ffi(
    name: *const c_char,
    password: *const c_char,
) -> *mut c_char {
    let (name, password) = match (c_str_arg(name), c_str_arg(password)) {
        (Some(n), Some(p)) => (n, p),
        _ => return ptr::null_mut(),
    };

    match api::generate_srp_verifier_record(name, password) {
        Ok(encoded) => string_to_c_char(encoded),
        Err(e) => create_error_response(&format!("Verifier generation failed: {}", e)),
    }
}

/// Parse an SRP verifier record into its base64 `(verifier, salt)` parts.
///
/// # Safety
///
/// `encoded` must be a valid null-terminated C string; the returned
/// pointer must be freed by calling `free_string`.
#[no_mangle]
pub unsafe extern "C" fn parse_srp_verifier_record_ffi(encoded: *const c_char) -> *mut c_char {
    let encoded = match c_str_arg(encoded) {
        Some(s) => s,
        None => return ptr::null_mut(),
    };

    match api::parse_srp_verifier_record(encoded) {
        Ok(parts) => match serde_json::to_string(&parts) {
            Ok(json) => string_to_c_char(json),
            Err(e) => create_error_response(&format!("Failed to serialize output: {}", e)),
        },
        Err(e) => create_error_response(&format!("Parse failed: {}", e)),
    }
}

/// Translate a legacy SHA-1 password hash, for migrating old accounts.
///
/// # Safety
///
/// `name` and `password` must be valid null-terminated C strings; the
/// returned pointer must be freed by calling `free_string`.
#[no_mangle]
pub unsafe extern "C" fn translate_legacy_password_ffi(
    name: *const c_char,
    password: *const c_char,
) -> *mut c_char {
    let (name, password) = match (c_str_arg(name), c_str_arg(password)) {
        (Some(n), Some(p)) => (n, p),
        _ => return ptr::null_mut(),
    };

    string_to_c_char(api::translate_legacy_password(name, password))
}

/// Free a string that was allocated by Rust.
///
/// # Safety
///
/// - `s` must be a pointer that was returned by one of the FFI functions
/// - This function must only be called once per pointer
/// - After calling this function, the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Borrow a `*const c_char` as `&str`, or `None` if null or not valid UTF-8.
///
/// # Safety
///
/// `ptr` must be a valid null-terminated C string or null.
unsafe fn c_str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Convert a Rust string to a C string pointer.
fn string_to_c_char(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Create an error response JSON string.
fn create_error_response(message: &str) -> *mut c_char {
    let error_json = format!(r#"{{"success":false,"error":"{}"}}"#, message.replace('"', r#"\""#));
    string_to_c_char(error_json)
}
