// File:    auth.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: HMAC-SHA256 digest computation and verification over the encoded ciphertext text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Keyed digest computation and verification for transported ciphertext.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::compare;
use crate::encoding;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 digest of `message` keyed by `auth_key` and
/// returns the raw tag bytes as base64 text.
///
/// The message is always the encoded ciphertext text, never the raw
/// ciphertext bytes.
///
/// # Panics
///
/// Panics only if the HMAC implementation rejects the key, which cannot
/// happen: HMAC-SHA256 accepts keys of any length.
#[must_use]
pub fn digest(auth_key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(auth_key).expect("hmac accepts keys of any length");
    mac.update(message);
    encoding::encode(mac.finalize().into_bytes().as_slice())
}

/// Recomputes the digest of `message` and compares it against
/// `expected_digest` without short-circuiting on the first difference.
#[must_use]
pub fn verify(auth_key: &[u8], message: &[u8], expected_digest: &str) -> bool {
    let computed = digest(auth_key, message);
    compare::safe_eq(computed.as_bytes(), expected_digest.as_bytes())
}
