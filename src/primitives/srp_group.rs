//! The fixed SRP-6a group: RFC 5054's 2048-bit safe prime and generator,
//! hashed with SHA-256. This crate does not implement the SRP wire protocol
//! (session derivation, proof exchange) — only the group, the verifier
//! computation, and the verifier's on-disk encoding (spec.md §4.6).

use num_bigint::BigUint;
use srp::groups::G_2048;

/// The 2048-bit safe prime modulus `N`.
pub fn modulus() -> &'static BigUint {
    &G_2048.n
}

/// The generator `g`.
pub fn generator() -> &'static BigUint {
    &G_2048.g
}

/// Big-endian encoding of `N`, padded to the modulus byte length (256 bytes
/// for the 2048-bit group). Used to pad verifiers to a fixed size.
pub fn modulus_len_bytes() -> usize {
    (G_2048.n.bits() as usize).div_ceil(8)
}

/// Left-pads `bytes` with zeros to `modulus_len_bytes()`, matching the
/// group-element byte length SRP verifiers are stored at.
pub fn pad_to_modulus_len(bytes: Vec<u8>) -> Vec<u8> {
    let target = modulus_len_bytes();
    if bytes.len() >= target {
        return bytes;
    }
    let mut padded = vec![0u8; target - bytes.len()];
    padded.extend(bytes);
    padded
}
