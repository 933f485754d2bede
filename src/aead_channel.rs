//! Per-channel, per-direction packet sealing/opening (spec.md §4.4).
//!
//! Concurrent `seal`/`open` on the *same* channel's *same* direction is a
//! logic error; distinct channels or directions are safe to use
//! concurrently only if the caller also guarantees nonce uniqueness
//! (spec.md §5). This core does not itself serialize access.

pub use crate::primitives::aead::{seal, KEY_LEN, NONCE_LEN, SCRUB_BYTE, TAG_LEN};

use crate::error::CoreResult;
use crate::primitives::aead;

/// Decrypts `buf` in place and shrinks it to the plaintext length on
/// success. On failure, `buf` is left at its original length but its
/// decrypted region has been overwritten with `SCRUB_BYTE`; the caller MUST
/// NOT consume it.
pub fn open(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], buf: &mut Vec<u8>) -> CoreResult<()> {
    let plaintext_len = aead::open_in_place(key, nonce, buf)?;
    buf.truncate(plaintext_len);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn round_trip_via_vec_buffer() {
        let key = [0x00u8; KEY_LEN];
        let nonce = [0x00u8; NONCE_LEN];
        let plaintext = b"hello";

        let mut sealed = vec![0u8; plaintext.len() + TAG_LEN];
        seal(&key, &nonce, plaintext, &mut sealed).unwrap();

        open(&key, &nonce, &mut sealed).unwrap();
        assert_eq!(sealed, plaintext);
    }

    #[test]
    fn failed_open_does_not_shrink_buffer() {
        let key = [0x00u8; KEY_LEN];
        let nonce = [0x00u8; NONCE_LEN];
        let plaintext = b"hello";

        let mut sealed = vec![0u8; plaintext.len() + TAG_LEN];
        seal(&key, &nonce, plaintext, &mut sealed).unwrap();
        let original_len = sealed.len();
        sealed[0] ^= 1;

        let err = open(&key, &nonce, &mut sealed).unwrap_err();
        assert!(matches!(err, CoreError::AuthenticationFailure));
        assert_eq!(sealed.len(), original_len);
    }
}
