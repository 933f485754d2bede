//! Derives all session subkeys from the ECDH shared secret, with
//! deterministic domain separation (spec.md §4.3).
//!
//! The three info strings below are part of the wire protocol; changing
//! them is a breaking change. No other key material is ever derived from
//! the root key.

use zeroize::Zeroize;

use crate::channel_keys::{ChannelKeys, N_CHANNELS};
use crate::error::CoreResult;
use crate::handshake::HandshakeDigest;
use crate::keypair::{ecdh_shared_secret, EcdhePublicKey, KeyPair};
use crate::primitives::hkdf;

const CLIENT_SEND_INFO: &[u8] = b"minetest-client-channel-send-key";
const SERVER_SEND_INFO: &[u8] = b"minetest-server-channel-send-key";
const HANDSHAKE_DIGEST_INFO: &[u8] = b"minetest-handshake-digest-for-srp";

/// The two channel-key arrays and the handshake digest produced by one
/// ECDH exchange, ready to hand to the AEAD layer and the SRP identity
/// binding respectively.
pub struct SessionKeys {
    pub channel_keys: ChannelKeys,
    pub handshake_digest: HandshakeDigest,
}

/// Derives `SessionKeys` from `local`'s private key and `peer_pub`.
///
/// A pure function of `(local_private, peer_public)`: two calls with the
/// same inputs yield byte-identical output.
pub fn derive_session_keys(local: &KeyPair, peer_pub: &EcdhePublicKey) -> CoreResult<SessionKeys> {
    let shared_secret = ecdh_shared_secret(local, peer_pub)?;

    let mut root = hkdf::extract(&[], shared_secret.as_bytes());
    // `shared_secret` zeroizes itself on drop at the end of this function.

    let mut client_send_keys = vec![0u8; N_CHANNELS * 16];
    let mut server_send_keys = vec![0u8; N_CHANNELS * 16];
    let mut handshake_digest = [0u8; 32];

    hkdf::expand(&root, CLIENT_SEND_INFO, &mut client_send_keys)?;
    hkdf::expand(&root, SERVER_SEND_INFO, &mut server_send_keys)?;
    hkdf::expand(&root, HANDSHAKE_DIGEST_INFO, &mut handshake_digest)?;

    dump_key_material_if_enabled(&root, &client_send_keys, &server_send_keys, &handshake_digest);

    root.zeroize();

    let channel_keys = ChannelKeys::from_expanded(&client_send_keys, &server_send_keys);
    client_send_keys.zeroize();
    server_send_keys.zeroize();

    Ok(SessionKeys {
        channel_keys,
        handshake_digest: HandshakeDigest(handshake_digest),
    })
}

/// Off-by-default diagnostic hook, re-architected from the original's
/// `#ifndef NDEBUG` + runtime `secure.dump_network_encryption_key` setting
/// (spec.md §9) into a compile-time, non-default Cargo feature. Never
/// enabled by release builds.
#[cfg(feature = "insecure-debug-logging")]
fn dump_key_material_if_enabled(
    root: &[u8; 32],
    client_send_keys: &[u8],
    server_send_keys: &[u8],
    handshake_digest: &[u8; 32],
) {
    log::debug!("network root key: {}", crate::primitives::base64::encode(root));
    log::debug!(
        "handshake digest: {}",
        crate::primitives::base64::encode(handshake_digest)
    );
    for (i, chunk) in client_send_keys.chunks(16).enumerate() {
        log::trace!("client channel {i} key: {}", crate::primitives::base64::encode(chunk));
    }
    for (i, chunk) in server_send_keys.chunks(16).enumerate() {
        log::trace!("server channel {i} key: {}", crate::primitives::base64::encode(chunk));
    }
}

#[cfg(not(feature = "insecure-debug-logging"))]
fn dump_key_material_if_enabled(_: &[u8; 32], _: &[u8], _: &[u8], _: &[u8; 32]) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::DeterministicRandom;
    use std::collections::HashSet;

    fn pair(seed: u64) -> KeyPair {
        KeyPair::generate_ephemeral(&DeterministicRandom::new(seed)).unwrap()
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = pair(1);
        let b = pair(2);

        let first = derive_session_keys(&a, b.public_key()).unwrap();
        let second = derive_session_keys(&a, b.public_key()).unwrap();

        assert_eq!(
            first.channel_keys.client_send,
            second.channel_keys.client_send
        );
        assert_eq!(
            first.channel_keys.server_send,
            second.channel_keys.server_send
        );
        assert_eq!(
            first.handshake_digest.as_bytes(),
            second.handshake_digest.as_bytes()
        );
    }

    #[test]
    fn both_peers_agree() {
        let a = pair(10);
        let b = pair(11);

        let from_a = derive_session_keys(&a, b.public_key()).unwrap();
        let from_b = derive_session_keys(&b, a.public_key()).unwrap();

        assert_eq!(
            from_a.channel_keys.client_send,
            from_b.channel_keys.client_send
        );
        assert_eq!(
            from_a.channel_keys.server_send,
            from_b.channel_keys.server_send
        );
        assert_eq!(
            from_a.handshake_digest.as_bytes(),
            from_b.handshake_digest.as_bytes()
        );
    }

    /// Domain separation: sampling many random shared secrets, the three
    /// output categories should never collide with one another (spec.md §8).
    #[test]
    fn domain_separation_holds_across_samples() {
        let mut seen_client: HashSet<[u8; 16]> = HashSet::new();
        let mut seen_server: HashSet<[u8; 16]> = HashSet::new();
        let mut seen_digest: HashSet<[u8; 32]> = HashSet::new();

        for seed in 0..50u64 {
            let a = pair(seed * 2);
            let b = pair(seed * 2 + 1);
            let keys = derive_session_keys(&a, b.public_key()).unwrap();

            for ch in keys.channel_keys.client_send {
                assert!(!seen_server.contains(&ch), "client/server key collision");
                seen_client.insert(ch);
            }
            for ch in keys.channel_keys.server_send {
                assert!(!seen_client.contains(&ch), "server/client key collision");
                seen_server.insert(ch);
            }
            assert!(
                !seen_digest.contains(keys.handshake_digest.as_bytes()),
                "handshake digest collision"
            );
            seen_digest.insert(*keys.handshake_digest.as_bytes());
        }
    }

    #[test]
    fn weak_peer_key_propagates_as_error() {
        let a = pair(99);
        let zero_peer = EcdhePublicKey::from_bytes([0u8; 32]);
        assert!(derive_session_keys(&a, &zero_peer).is_err());
    }
}
