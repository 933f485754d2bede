//! HKDF-Extract / HKDF-Expand over SHA-256 (RFC 5869).

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};

/// `HKDF-Extract-SHA256(salt, ikm) -> PRK` (32 bytes).
pub fn extract(salt: &[u8], ikm: &[u8]) -> [u8; 32] {
    let salt = if salt.is_empty() { None } else { Some(salt) };
    let (prk, _) = Hkdf::<Sha256>::extract(salt, ikm);
    let mut out = [0u8; 32];
    out.copy_from_slice(&prk);
    out
}

/// `HKDF-Expand-SHA256(PRK, info, L) -> OKM`, writing `out.len()` bytes.
pub fn expand(prk: &[u8; 32], info: &[u8], out: &mut [u8]) -> CoreResult<()> {
    let hk = Hkdf::<Sha256>::from_prk(prk)
        .map_err(|e| CoreError::PrimitiveFailure(format!("invalid HKDF PRK length: {e}")))?;
    hk.expand(info, out)
        .map_err(|e| CoreError::PrimitiveFailure(format!("HKDF expand output too long: {e}")))
}
