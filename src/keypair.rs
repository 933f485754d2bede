//! Ephemeral Curve25519 key pairs and ECDH shared-secret computation.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CoreError, CoreResult};
use crate::primitives::curve25519;
use crate::random::SecureRandom;

/// A clamped Curve25519 private scalar. Wiped on drop; never read after the
/// session it belongs to ends.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EcdhePrivateKey([u8; 32]);

impl EcdhePrivateKey {
    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// A Curve25519 public key. Freely transmissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdhePublicKey(pub [u8; 32]);

impl EcdhePublicKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// The shared secret produced by ECDH. Stack-only; never outlives the
/// function that derives it; wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EcdhSharedSecret([u8; 32]);

impl EcdhSharedSecret {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// An ephemeral Curve25519 key pair.
pub struct KeyPair {
    private_key: EcdhePrivateKey,
    public_key: EcdhePublicKey,
}

impl KeyPair {
    /// Draws fresh randomness, clamps it, and computes the matching public
    /// key via base-point multiplication (spec.md §4.1).
    pub fn generate_ephemeral(rng: &impl SecureRandom) -> CoreResult<Self> {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes)?;
        curve25519::clamp(&mut bytes);
        let public_key = curve25519::secret_to_public(&bytes);
        Ok(Self {
            private_key: EcdhePrivateKey(bytes),
            public_key: EcdhePublicKey(public_key),
        })
    }

    pub fn public_key(&self) -> &EcdhePublicKey {
        &self.public_key
    }

    /// Exposes the clamped private scalar to `crate::api`, the one place
    /// that hands key material across a JSON/FFI boundary. Not `pub`:
    /// nothing outside this crate should ever read it directly.
    pub(crate) fn private_key_bytes(&self) -> &[u8; 32] {
        self.private_key.as_bytes()
    }

    /// Reconstructs a key pair from a raw, unclamped 32-byte scalar —
    /// used by the JSON/FFI surface, which hands private key bytes back to
    /// this crate rather than holding a live `KeyPair` across the boundary.
    /// Clamps `bytes` the same way `generate_ephemeral` clamps fresh
    /// randomness, so a caller that stores the post-clamp bytes it was
    /// given back gets the identical key pair.
    pub fn from_private_bytes(mut bytes: [u8; 32]) -> Self {
        curve25519::clamp(&mut bytes);
        let public_key = curve25519::secret_to_public(&bytes);
        Self {
            private_key: EcdhePrivateKey(bytes),
            public_key: EcdhePublicKey(public_key),
        }
    }
}

/// Computes the ECDH shared secret between `local`'s private key and
/// `peer_pub`. Returns `WeakPeerKey` if the result is the all-zeros point
/// (low-order point detection); this is the only failure mode besides an
/// internal primitive error, which cannot occur for X25519 (spec.md §4.2).
pub fn ecdh_shared_secret(
    local: &KeyPair,
    peer_pub: &EcdhePublicKey,
) -> CoreResult<EcdhSharedSecret> {
    let raw = curve25519::scalar_mult(local.private_key.as_bytes(), peer_pub.as_bytes());
    if curve25519::is_zero_point(&raw) {
        return Err(CoreError::WeakPeerKey);
    }
    Ok(EcdhSharedSecret(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::DeterministicRandom;
    use crate::random::OsRandom;

    #[test]
    fn generated_private_key_is_clamped() {
        let rng = OsRandom;
        let kp = KeyPair::generate_ephemeral(&rng).unwrap();
        assert!(curve25519::is_clamped(kp.private_key.as_bytes()));
    }

    #[test]
    fn ecdh_is_symmetric() {
        let rng_a = DeterministicRandom::new(1);
        let rng_b = DeterministicRandom::new(2);
        let a = KeyPair::generate_ephemeral(&rng_a).unwrap();
        let b = KeyPair::generate_ephemeral(&rng_b).unwrap();

        let shared_a = ecdh_shared_secret(&a, b.public_key()).unwrap();
        let shared_b = ecdh_shared_secret(&b, a.public_key()).unwrap();
        assert_eq!(shared_a.as_bytes(), shared_b.as_bytes());
    }

    #[test]
    fn weak_peer_key_rejected() {
        let rng = DeterministicRandom::new(3);
        let a = KeyPair::generate_ephemeral(&rng).unwrap();
        let zero_peer = EcdhePublicKey::from_bytes([0u8; 32]);
        let err = ecdh_shared_secret(&a, &zero_peer).unwrap_err();
        assert!(matches!(err, CoreError::WeakPeerKey));
    }

    #[test]
    fn from_private_bytes_reproduces_generated_keypair() {
        let rng = DeterministicRandom::new(42);
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes).unwrap();
        curve25519::clamp(&mut bytes);

        let direct = KeyPair::from_private_bytes(bytes);
        let expected_public = curve25519::secret_to_public(&bytes);
        assert_eq!(direct.public_key().as_bytes(), &expected_public);
    }

    #[test]
    fn distinct_seeds_give_distinct_keys() {
        let rng_a = DeterministicRandom::new(10);
        let rng_b = DeterministicRandom::new(11);
        let a = KeyPair::generate_ephemeral(&rng_a).unwrap();
        let b = KeyPair::generate_ephemeral(&rng_b).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }
}
