// File:    crypto.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Handles the core cryptographic operation, the byte-wise XOR combination of two equal-length buffers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the core cryptographic operation.

use crate::error::PadError;

/// Performs a byte-wise XOR of two slices of equal length.
///
/// XOR is self-inverse, so the same routine serves both encryption and
/// decryption: combining the output with either input recovers the other.
///
/// # Errors
///
/// Returns [`PadError::LengthMismatch`] if the slices differ in length. No
/// bytes are processed in that case.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, PadError> {
    if a.len() != b.len() {
        return Err(PadError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
