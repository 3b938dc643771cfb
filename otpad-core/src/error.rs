//! Failure taxonomy for padding, encoding, and verification.

use thiserror::Error;

/// Failures reported by the padding, encoding, and verification routines.
///
/// Every failure is returned synchronously to the caller; nothing is retried
/// internally and no partial result is surfaced. In particular,
/// [`PadError::AuthenticationFailed`] guarantees the decrypted value was
/// never produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PadError {
    /// The two operands of the pad must have the same byte length.
    #[error("length mismatch: operands are {left} and {right} bytes")]
    LengthMismatch {
        /// Byte length of the first operand.
        left: usize,
        /// Byte length of the second operand.
        right: usize,
    },

    /// The input is not valid standard base64.
    #[error("input is not valid base64")]
    MalformedEncoding,

    /// An authentication key was supplied without an expected digest.
    #[error("hmac key supplied without an hmac digest")]
    MissingDigest,

    /// The recomputed digest of the encrypted text does not match the
    /// expected digest.
    #[error("computed hmac of the encrypted text does not match the expected digest")]
    AuthenticationFailed,
}
