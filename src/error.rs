//! Error types for the session crypto core.

use thiserror::Error;

/// Errors that can occur while establishing or using an encrypted session.
///
/// No variant ever carries secret material; messages are safe to log.
#[derive(Error, Debug)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
#[cfg_attr(feature = "uniffi", uniffi(flat_error))]
pub enum CoreError {
    /// The OS RNG refused to produce randomness. Fatal for the caller.
    #[error("secure randomness unavailable")]
    RandomnessUnavailable,

    /// ECDH produced the all-zeros shared secret (low-order peer point).
    /// The session must be aborted.
    #[error("peer supplied a weak ECDH public key")]
    WeakPeerKey,

    /// Caller supplied mismatched buffer sizes or oversize inputs to
    /// seal/open. Programmer error; no work is attempted.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// AEAD seal failed inside the underlying primitive.
    #[error("packet encryption failed")]
    EncryptionFailure,

    /// AEAD open rejected the tag, or the underlying primitive failed.
    /// Not fatal for the session; the packet is simply dropped.
    #[error("packet authentication failed")]
    AuthenticationFailure,

    /// AEAD open was called on a buffer too short to hold a tag.
    /// Equivalent to `AuthenticationFailure` from the caller's perspective.
    #[error("message too short to contain an AEAD tag")]
    MessageTooShort,

    /// `SrpVerifierStore::decode` could not parse the record.
    #[error("malformed SRP verifier record")]
    MalformedVerifier,

    /// An underlying crypto crate signaled a failure this taxonomy does not
    /// name a dedicated kind for (e.g. a construction failure from a
    /// malformed key length). Covers the "internal primitive error" case
    /// the original HACL*/OpenSSL bindings report as a bare bool failure.
    #[error("cryptographic primitive failure: {0}")]
    PrimitiveFailure(String),
}

/// Result type alias for session crypto operations.
pub type CoreResult<T> = Result<T, CoreError>;
