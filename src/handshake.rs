//! The handshake digest and the SRP identity it binds to the ECDH transcript.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CoreResult;
use crate::primitives::{base64, hmac};

/// Binds SRP authentication to the ECDH handshake: used only as the HMAC
/// key in `make_srp_identity`. Lifetime: from the end of key agreement to
/// the end of authentication, then discarded. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HandshakeDigest(pub(crate) [u8; 32]);

impl HandshakeDigest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Computes the SRP identity: `name` used both as the HMAC message and as
/// the identity's prefix, verbatim (no case folding here — that is the SRP
/// component's responsibility).
///
/// Two peers that computed the same handshake digest and agree on `name`
/// produce byte-identical identities; tampering with the DH exchange
/// changes the digest and therefore invalidates any relayed SRP session.
pub fn make_srp_identity(digest: &HandshakeDigest, name: &str) -> CoreResult<String> {
    let tag = hmac::hmac_sha256(digest.as_bytes(), name.as_bytes())?;
    Ok(format!("{name}:{}", base64::encode(&tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_deterministic() {
        let digest = HandshakeDigest([7u8; 32]);
        let a = make_srp_identity(&digest, "alice").unwrap();
        let b = make_srp_identity(&digest, "alice").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn identity_changes_with_digest_or_name() {
        let digest = HandshakeDigest([7u8; 32]);
        let other_digest = HandshakeDigest([8u8; 32]);
        let base = make_srp_identity(&digest, "alice").unwrap();
        assert_ne!(base, make_srp_identity(&other_digest, "alice").unwrap());
        assert_ne!(base, make_srp_identity(&digest, "bob").unwrap());
    }

    #[test]
    fn identity_has_expected_prefix() {
        let digest = HandshakeDigest([0u8; 32]);
        let identity = make_srp_identity(&digest, "alice").unwrap();
        assert!(identity.starts_with("alice:"));
        let b64_part = &identity["alice:".len()..];
        assert_eq!(b64_part.len(), 44); // 32 bytes -> 44 base64 chars with padding
    }

    /// Pinned test vector, spec.md §8 scenario 4.
    #[test]
    fn test_vector() {
        let digest = HandshakeDigest([0u8; 32]);
        let identity = make_srp_identity(&digest, "alice").unwrap();
        assert_eq!(
            identity,
            "alice:f3EiSv1EQFW1QDyrE2WZdQ2OfeQHG/yO7eaOxNTMMSs="
        );
    }
}
