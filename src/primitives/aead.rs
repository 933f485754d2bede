//! AES-128-GCM, 12-byte nonce, 16-byte tag, no associated data.
//!
//! These functions write only into caller-provided buffers and perform no
//! heap allocation of their own (spec.md §4.4).

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Key, Nonce};

use crate::error::{CoreError, CoreResult};

pub const KEY_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// Scrub pattern written over buffers that failed authentication, so
/// unverified plaintext can never be consumed downstream (spec.md §9).
pub const SCRUB_BYTE: u8 = 0xDE;

fn cipher(key: &[u8; KEY_LEN]) -> Aes128Gcm {
    Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key))
}

/// Seals `plaintext` in place inside `out`: `out[..plaintext.len()]` becomes
/// the ciphertext, `out[plaintext.len()..]` becomes the 16-byte tag.
///
/// Preconditions: `out.len() == plaintext.len() + TAG_LEN`;
/// `plaintext.len() < 2^31`. Violations return `InvalidParameters`.
pub fn seal(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    out: &mut [u8],
) -> CoreResult<()> {
    if out.len() != plaintext.len() + TAG_LEN {
        return Err(CoreError::InvalidParameters(
            "out.len() must equal plaintext.len() + 16".into(),
        ));
    }
    if plaintext.len() >= i32::MAX as usize {
        return Err(CoreError::InvalidParameters(
            "plaintext must be shorter than 2^31 bytes".into(),
        ));
    }

    let (body, tag_out) = out.split_at_mut(plaintext.len());
    body.copy_from_slice(plaintext);

    let nonce = Nonce::from_slice(nonce);
    let tag = cipher(key)
        .encrypt_in_place_detached(nonce, b"", body)
        .map_err(|_| CoreError::EncryptionFailure)?;
    tag_out.copy_from_slice(tag.as_slice());
    Ok(())
}

/// Decrypts `inout` in place, treating the last `TAG_LEN` bytes as the tag.
/// On success, returns the plaintext length (`inout.len() - TAG_LEN`); the
/// caller is responsible for shrinking its buffer view to that length.
///
/// On any failure, the region that was being decrypted
/// (`inout[..inout.len() - TAG_LEN]`) is overwritten with `SCRUB_BYTE` before
/// returning, so the caller can never consume unverified plaintext even if
/// it ignores the error.
///
/// Precondition: `inout.len() > TAG_LEN`, otherwise `MessageTooShort`.
pub fn open_in_place(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    inout: &mut [u8],
) -> CoreResult<usize> {
    if inout.len() <= TAG_LEN {
        return Err(CoreError::MessageTooShort);
    }

    let plaintext_len = inout.len() - TAG_LEN;
    let (body, tag) = inout.split_at_mut(plaintext_len);
    let tag = aes_gcm::Tag::clone_from_slice(tag);
    let nonce = Nonce::from_slice(nonce);

    match cipher(key).decrypt_in_place_detached(nonce, b"", body, &tag) {
        Ok(()) => Ok(plaintext_len),
        Err(_) => {
            body.iter_mut().for_each(|b| *b = SCRUB_BYTE);
            Err(CoreError::AuthenticationFailure)
        }
    }
}
