//! Curve25519 scalar multiplication and base-point multiplication.
//!
//! Deliberately built on `x25519_dalek::x25519`, the raw Montgomery-ladder
//! free function, rather than the crate's `EphemeralSecret`/`StaticSecret`
//! wrappers: the handshake needs to inspect and assert on the clamped scalar
//! directly (spec.md §3), which those higher-level types hide by design.

use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

/// Curve25519 clamping: `bytes[0] &= 0xF8; bytes[31] &= 0x7F; bytes[31] |= 0x40`.
pub fn clamp(bytes: &mut [u8; 32]) {
    bytes[0] &= 0xF8;
    bytes[31] &= 0x7F;
    bytes[31] |= 0x40;
}

/// `true` iff `bytes` already satisfies the Curve25519 clamping invariant.
pub fn is_clamped(bytes: &[u8; 32]) -> bool {
    bytes[0] & 0x07 == 0 && bytes[31] & 0x80 == 0 && bytes[31] & 0x40 != 0
}

/// Base-point multiplication: computes the public key for a clamped scalar.
///
/// This is the same operation the original calls
/// `EverCrypt_Curve25519_secret_to_public`.
pub fn secret_to_public(scalar: &[u8; 32]) -> [u8; 32] {
    x25519(*scalar, X25519_BASEPOINT_BYTES)
}

/// Scalar multiplication: computes `scalar * point`.
pub fn scalar_mult(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    x25519(*scalar, *point)
}

/// `true` iff `point` is the all-zeros Curve25519 output, which only occurs
/// for a low-order (weak) peer public key.
pub fn is_zero_point(point: &[u8; 32]) -> bool {
    point.iter().all(|&b| b == 0)
}
