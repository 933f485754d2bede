//! SRP-6a verifier generation and the `"#1#<salt>#<verifier>"` storage
//! format (spec.md §4.6).
//!
//! This crate does not implement the SRP wire protocol's message exchange —
//! only verifier creation and the on-disk/DB record format, grounded on the
//! same `srp_create_salted_verification_key` formula the original calls via
//! `auth.cpp`'s `gen_srp_v`: `x = H(salt || H(lowercase(name) || ":" ||
//! password))`, `v = g^x mod N`.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};
use crate::primitives::{base64, srp_group};
use crate::random::SecureRandom;

/// Salt length generated by `generate_verifier_and_salt`. The on-disk
/// format tolerates any length since base64 is self-describing.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Storage/encoding operations for SRP-6a password verifiers.
pub struct SrpVerifierStore;

impl SrpVerifierStore {
    /// Deterministically derives `v = g^x mod N` from `(name, password,
    /// salt)`. The name is ASCII-lowercased before being mixed into `x`, so
    /// two names that differ only in case share a verifier.
    pub fn generate_verifier(name: &str, password: &str, salt: &[u8]) -> Vec<u8> {
        let x = derive_private_key(name, password, salt);
        let v = srp_group::generator().modpow(&x, srp_group::modulus());
        srp_group::pad_to_modulus_len(v.to_bytes_be())
    }

    /// Generates a fresh random salt and returns `(verifier, salt)`. Used
    /// offline at account creation; a randomness failure is fatal.
    pub fn generate_verifier_and_salt(
        name: &str,
        password: &str,
        rng: &impl SecureRandom,
    ) -> CoreResult<(Vec<u8>, Vec<u8>)> {
        let mut salt = vec![0u8; DEFAULT_SALT_LEN];
        rng.fill(&mut salt)?;
        let verifier = Self::generate_verifier(name, password, &salt);
        Ok((verifier, salt))
    }

    /// Encodes `(verifier, salt)` as `"#1#<b64(salt)>#<b64(verifier)>"`.
    pub fn encode(verifier: &[u8], salt: &[u8]) -> String {
        format!("#1#{}#{}", base64::encode(salt), base64::encode(verifier))
    }

    /// Parses a `"#1#<b64(salt)>#<b64(verifier)>"` record, returning
    /// `(verifier, salt)`. Requires exactly four `'#'`-separated
    /// components (the first empty, the second literally `"1"`), and both
    /// base64 strings to pass strict validation. Never panics on
    /// truncated or malformed input.
    pub fn decode(encoded: &str) -> CoreResult<(Vec<u8>, Vec<u8>)> {
        let parts: Vec<&str> = encoded.split('#').collect();
        if parts.len() != 4 || !parts[0].is_empty() || parts[1] != "1" {
            return Err(CoreError::MalformedVerifier);
        }
        let (b64_salt, b64_verifier) = (parts[2], parts[3]);
        if b64_salt.is_empty() || b64_verifier.is_empty() {
            return Err(CoreError::MalformedVerifier);
        }
        if !base64::is_valid(b64_salt) || !base64::is_valid(b64_verifier) {
            return Err(CoreError::MalformedVerifier);
        }
        Ok((base64::decode(b64_verifier), base64::decode(b64_salt)))
    }

    /// Convenience: `encode(generate_verifier_and_salt(name, password))`.
    pub fn get_encoded(name: &str, password: &str, rng: &impl SecureRandom) -> CoreResult<String> {
        let (verifier, salt) = Self::generate_verifier_and_salt(name, password, rng)?;
        Ok(Self::encode(&verifier, &salt))
    }
}

fn derive_private_key(name: &str, password: &str, salt: &[u8]) -> BigUint {
    let lower_name = name.to_ascii_lowercase();

    let mut identity_hasher = Sha256::new();
    identity_hasher.update(lower_name.as_bytes());
    identity_hasher.update(b":");
    identity_hasher.update(password.as_bytes());
    let identity_hash = identity_hasher.finalize();

    let mut x_hasher = Sha256::new();
    x_hasher.update(salt);
    x_hasher.update(&identity_hash);
    BigUint::from_bytes_be(&x_hasher.finalize())
}
