//! Legacy SHA-1 password hash, kept only to translate old accounts into SRP
//! verifiers during migration (spec.md §4.7).
//!
//! This is deliberately weak and exists for compatibility, not security: no
//! salt, no iteration, simple concatenation. Never use it for new accounts.

use crate::primitives::{base64, sha1};

/// `base64(SHA-1(name ++ password))`, or the empty string if `password` is
/// empty (mirrors the original's "no password set" sentinel).
pub fn translate_password(name: &str, password: &str) -> String {
    if password.is_empty() {
        return String::new();
    }

    let mut msg = Vec::with_capacity(name.len() + password.len());
    msg.extend_from_slice(name.as_bytes());
    msg.extend_from_slice(password.as_bytes());

    base64::encode(&sha1::sha1(&msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pinned test vector, spec.md §8 scenario 1.
    #[test]
    fn empty_password_yields_empty_hash() {
        assert_eq!(translate_password("alice", ""), "");
    }

    /// Pinned test vector, spec.md §8 scenario 2.
    #[test]
    fn pinned_vector() {
        assert_eq!(
            translate_password("alice", "hunter2"),
            "CLCnCpbf/afl3abdeKmVh8jgT6g="
        );
    }

    #[test]
    fn different_names_give_different_hashes() {
        assert_ne!(
            translate_password("alice", "hunter2"),
            translate_password("bob", "hunter2")
        );
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(
            translate_password("alice", "hunter2"),
            translate_password("alice", "hunter2")
        );
    }
}
