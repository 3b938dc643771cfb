// File:    encoding.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Base64 transport encoding of raw ciphertext and digest bytes.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Base64 transport encoding of raw bytes.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::PadError;

/// Encodes raw bytes as standard base64 text (RFC 4648, with padding).
///
/// No line wrapping or any other transformation is applied.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64 text back into the raw bytes it was produced
/// from.
///
/// # Errors
///
/// Returns [`PadError::MalformedEncoding`] if the input is not valid
/// base64.
pub fn decode(text: &str) -> Result<Vec<u8>, PadError> {
    STANDARD
        .decode(text)
        .map_err(|_| PadError::MalformedEncoding)
}
