// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Envelope Layout Tests
//!
//! Wire layout `ephemeral public (65) | iv (16) | ciphertext (N) | mac (32)`
//! and rejection of truncated input.

use eth_ecies::crypto::{decrypt, encrypt, EciesError, EncryptOptions, Envelope, KeyPair, ENVELOPE_OVERHEAD};

#[test]
fn test_overhead_is_113_bytes() {
    assert_eq!(ENVELOPE_OVERHEAD, 65 + 16 + 32);
}

#[test]
fn test_short_envelopes_are_malformed() {
    let recipient = KeyPair::generate().unwrap();

    for len in 0..ENVELOPE_OVERHEAD {
        let bytes = vec![0x04u8; len];
        let result = decrypt(&recipient.private_key()[..], &bytes);
        assert!(
            matches!(result, Err(EciesError::MalformedEnvelope { .. })),
            "length {} gave {:?}",
            len,
            result
        );
    }
}

#[test]
fn test_malformed_checked_before_private_key() {
    // Structure is validated before any key is parsed
    assert!(matches!(
        decrypt(&[0u8; 32], &[0u8; 50]),
        Err(EciesError::MalformedEnvelope { .. })
    ));
}

#[test]
fn test_decoded_fields_match_encryption() {
    let recipient = KeyPair::generate().unwrap();
    let iv = [7u8; 16];
    let bytes = encrypt(
        recipient.public_key(),
        b"layout check",
        &EncryptOptions::new().with_iv(iv),
    )
    .unwrap();

    let envelope = Envelope::decode(&bytes).unwrap();
    assert_eq!(envelope.ephemeral_public_key[0], 0x04);
    assert_eq!(envelope.iv, &iv);
    assert_eq!(envelope.ciphertext.len(), b"layout check".len());
    assert_eq!(Envelope::plaintext_len(bytes.len()), Some(envelope.ciphertext.len()));
    assert_eq!(envelope.encode(), bytes);
}

#[test]
fn test_ephemeral_key_differs_from_recipient_key() {
    let recipient = KeyPair::generate().unwrap();
    let bytes = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default()).unwrap();

    let envelope = Envelope::decode(&bytes).unwrap();
    assert_ne!(&envelope.ephemeral_public_key[1..], &recipient.public_key()[..]);
}
