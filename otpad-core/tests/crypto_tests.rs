#![allow(missing_docs)]
use otpad_core::compare::safe_eq;
use otpad_core::error::PadError;
use otpad_core::{crypto, encoding};

#[test]
fn test_xor_roundtrip() {
    let plaintext = b"Hello, world!";
    let pad = (0..plaintext.len())
        .map(|i| ((i * 7) % 256) as u8)
        .collect::<Vec<u8>>();

    let ciphertext = crypto::xor(plaintext, &pad).expect("equal lengths");
    let decrypted_plaintext = crypto::xor(&ciphertext, &pad).expect("equal lengths");

    assert_eq!(plaintext, &decrypted_plaintext[..]);
}

#[test]
fn test_xor_is_symmetric() {
    let a = b"operand one";
    let b = b"operand two";

    assert_eq!(
        crypto::xor(a, b).expect("equal lengths"),
        crypto::xor(b, a).expect("equal lengths")
    );
}

#[test]
fn test_xor_rejects_unequal_lengths() {
    let err = crypto::xor(b"abc", b"defg").expect_err("lengths differ");
    assert_eq!(err, PadError::LengthMismatch { left: 3, right: 4 });
}

#[test]
fn test_xor_of_empty_inputs() {
    assert_eq!(crypto::xor(b"", b"").expect("equal lengths"), Vec::<u8>::new());
}

#[test]
fn test_encode_decode_roundtrip() {
    let cases: [&[u8]; 4] = [b"", b"\x00\x01\x02", b"hello world", &[0xff; 64]];
    for bytes in cases {
        let text = encoding::encode(bytes);
        assert_eq!(encoding::decode(&text).expect("valid base64"), bytes);
    }
}

#[test]
fn test_encode_is_standard_base64_with_padding() {
    assert_eq!(encoding::encode(b"otp"), "b3Rw");
    assert_eq!(encoding::encode(b"otpa"), "b3RwYQ==");
}

#[test]
fn test_decode_rejects_invalid_base64() {
    let err = encoding::decode("@@not-base64@@").expect_err("invalid input");
    assert_eq!(err, PadError::MalformedEncoding);
}

#[test]
fn test_safe_eq_equal_sequences() {
    assert!(safe_eq(b"", b""));
    assert!(safe_eq(b"digest", b"digest"));
}

#[test]
fn test_safe_eq_detects_differing_byte() {
    assert!(!safe_eq(b"digest", b"digesT"));
    assert!(!safe_eq(b"Xigest", b"digest"));
}

#[test]
fn test_safe_eq_ignores_length_difference_when_overlap_matches() {
    // Unequal lengths do not flip the result on their own; only differing
    // overlapping bytes do.
    assert!(safe_eq(b"abc", b"abcd"));
    assert!(safe_eq(b"abcd", b"abc"));
    assert!(safe_eq(b"", b"anything"));
}

#[test]
fn test_safe_eq_detects_mismatch_within_overlap_of_unequal_lengths() {
    assert!(!safe_eq(b"abX", b"abcd"));
}
