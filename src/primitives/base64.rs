//! Standard-alphabet base64 with strict validation.
//!
//! `decode` on input that hasn't passed `is_valid` has undefined output;
//! callers (`srp_verifier::SrpVerifierStore::decode` in this crate, and
//! historically the glTF data-URI loader this core doesn't implement) MUST
//! gate on `is_valid` first (spec.md §4.8).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Value of a standard-alphabet base64 character, or `None` if it isn't one.
fn alphabet_value(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// `true` iff `s` is valid standard base64 with padding: characters drawn
/// from `A-Z a-z 0-9 + /` plus an optional terminating `=`/`==`, length a
/// multiple of 4, no padding character in a non-terminal position, and (for
/// a padded final group) the unused low-order bits of the last data
/// character are zero — i.e. canonical, matching what `decode`'s underlying
/// engine actually accepts (it rejects non-canonical trailing bits rather
/// than silently masking them off).
pub fn is_valid(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.len() % 4 != 0 {
        return false;
    }

    let bytes = s.as_bytes();

    // Find where padding starts (if any); everything before it must be
    // alphabet, everything from there on must be '=' and at most 2 long.
    let first_pad = bytes.iter().position(|&b| b == b'=');
    match first_pad {
        None => bytes.iter().all(|&b| alphabet_value(b).is_some()),
        Some(pos) => {
            let pad_len = bytes.len() - pos;
            if pad_len > 2 || pos == 0 {
                return false;
            }
            if !bytes[..pos].iter().all(|&b| alphabet_value(b).is_some())
                || !bytes[pos..].iter().all(|&b| b == b'=')
            {
                return false;
            }

            let last_value = alphabet_value(bytes[pos - 1]).unwrap();
            let trailing_mask = if pad_len == 2 { 0b0000_1111 } else { 0b0000_0011 };
            last_value & trailing_mask == 0
        }
    }
}

/// Encode `bytes` as standard base64 with padding.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard base64 string. Undefined output if `!is_valid(s)`;
/// callers must gate on `is_valid` first.
pub fn decode(s: &str) -> Vec<u8> {
    STANDARD.decode(s).unwrap_or_default()
}
