//! SHA-1, used only by the legacy password translator for backward
//! compatibility with the historical on-wire format.

use sha1::{Digest, Sha1};

/// `SHA-1(msg) -> 20 bytes`.
pub fn sha1(msg: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(msg);
    let result = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&result);
    out
}
