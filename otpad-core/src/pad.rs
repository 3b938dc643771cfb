// File:    pad.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The pad and unpad entry points, tying together combination, encoding, and verification.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! One-time pad key exchange entry points.
//!
//! Each call is a single linear sequence of validation, transformation, and
//! optional verification. Verification failure aborts the call before any
//! decrypted output exists, so a caller can never observe a plaintext whose
//! digest did not check out.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::crypto;
use crate::encoding;
use crate::error::PadError;

/// The result of a [`pad`] call.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Padded {
    /// The XOR ciphertext, base64-encoded for transport.
    pub encrypted: String,
    /// The base64 HMAC-SHA256 digest of `encrypted`, present when an
    /// authentication key was supplied. It must travel with the ciphertext
    /// for later verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// The result of an [`unpad`] call.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Unpadded {
    /// The recovered secret, base64-encoded in the same representation used
    /// for the transported ciphertext.
    pub decrypted: String,
}

/// Encrypts `key_to_encrypt` with the one-time pad `key`.
///
/// Both inputs must have the same byte length. The ciphertext is returned
/// base64-encoded; when `hmac_key` is supplied, the returned digest is the
/// HMAC-SHA256 of that encoded text, keyed independently of the pad key.
///
/// # Errors
///
/// Returns [`PadError::LengthMismatch`] if `key` and `key_to_encrypt`
/// differ in length.
pub fn pad(
    key: &[u8],
    key_to_encrypt: &[u8],
    hmac_key: Option<&[u8]>,
) -> Result<Padded, PadError> {
    let combined = crypto::xor(key, key_to_encrypt)?;
    let encrypted = encoding::encode(&combined);
    debug!(
        "padded {} bytes (authenticated: {})",
        combined.len(),
        hmac_key.is_some()
    );

    let digest = hmac_key.map(|auth_key| auth::digest(auth_key, encrypted.as_bytes()));
    Ok(Padded { encrypted, digest })
}

/// Decrypts `encrypted_key` with the one-time pad `key`.
///
/// When `hmac_key` is supplied, `hmac_digest` is required and is verified
/// against the encrypted text exactly as supplied, before any decryption
/// takes place. A digest supplied without an authentication key is ignored.
///
/// # Errors
///
/// Returns [`PadError::MalformedEncoding`] if `encrypted_key` is not valid
/// base64, [`PadError::LengthMismatch`] if `key` and the decoded ciphertext
/// differ in length, [`PadError::MissingDigest`] if `hmac_key` is supplied
/// without `hmac_digest`, and [`PadError::AuthenticationFailed`] if the
/// recomputed digest does not match the expected one.
pub fn unpad(
    key: &[u8],
    encrypted_key: &str,
    hmac_key: Option<&[u8]>,
    hmac_digest: Option<&str>,
) -> Result<Unpadded, PadError> {
    let raw = encoding::decode(encrypted_key)?;
    if key.len() != raw.len() {
        return Err(PadError::LengthMismatch {
            left: key.len(),
            right: raw.len(),
        });
    }

    if let Some(auth_key) = hmac_key {
        let expected = hmac_digest.ok_or(PadError::MissingDigest)?;
        // The digest was computed over the encoded text at pad time, so it
        // is verified against the encoded text as supplied here, not the
        // decoded bytes.
        if !auth::verify(auth_key, encrypted_key.as_bytes(), expected) {
            warn!("hmac digest mismatch for {} byte ciphertext", raw.len());
            return Err(PadError::AuthenticationFailed);
        }
    }

    let combined = crypto::xor(key, &raw)?;
    debug!(
        "unpadded {} bytes (authenticated: {})",
        combined.len(),
        hmac_key.is_some()
    );
    Ok(Unpadded {
        decrypted: encoding::encode(&combined),
    })
}
