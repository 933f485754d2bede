//! HMAC-SHA-256.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};

type HmacSha256 = Hmac<Sha256>;

/// `HMAC-SHA-256(key, msg) -> 32 bytes`.
///
/// `Hmac::new_from_slice` accepts any key length (per RFC 2104, short keys
/// are zero-padded and long keys are hashed down); still returned as a
/// `CoreResult` rather than unwrapped, matching the other primitive
/// wrappers in this module and this crate's no-panic stance.
pub fn hmac_sha256(key: &[u8], msg: &[u8]) -> CoreResult<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CoreError::PrimitiveFailure(format!("invalid HMAC key: {e}")))?;
    mac.update(msg);
    let result = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_inputs() {
        let a = hmac_sha256(&[0u8; 32], b"alice").unwrap();
        let b = hmac_sha256(&[0u8; 32], b"alice").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn differs_with_key_or_message() {
        let base = hmac_sha256(&[0u8; 32], b"alice").unwrap();
        let diff_key = hmac_sha256(&[1u8; 32], b"alice").unwrap();
        let diff_msg = hmac_sha256(&[0u8; 32], b"alice2").unwrap();
        assert_ne!(base, diff_key);
        assert_ne!(base, diff_msg);
    }

    /// Pinned against spec.md §8 scenario 4: HMAC-SHA-256 with an all-zero
    /// 32-byte key and message `b"alice"`.
    #[test]
    fn test_vector_zero_key() {
        let tag = hmac_sha256(&[0u8; 32], b"alice").unwrap();
        let b64 = crate::primitives::base64::encode(&tag);
        assert_eq!(b64, "f3EiSv1EQFW1QDyrE2WZdQ2OfeQHG/yO7eaOxNTMMSs=");
    }
}
