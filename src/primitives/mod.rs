//! Pure cryptographic primitives.
//!
//! Each sub-module is a thin, safe wrapper around a vetted crate: inputs are
//! taken by immutable reference, outputs by mutable reference or return
//! value, and preconditions are documented at the call site rather than
//! pushed down into `unsafe` FFI (spec.md §9).

pub mod aead;
pub mod base64;
pub mod curve25519;
pub mod hkdf;
pub mod hmac;
pub mod sha1;
pub mod srp_group;
