// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECIES Encrypt/Decrypt Tests
//!
//! End-to-end behaviour of the public API:
//! - Round trip for short, empty and long messages
//! - Wrong-key and tamper rejection with `MacMismatch`
//! - Determinism with a fixed IV and ephemeral key
//! - The "Hello, world." cross-implementation vector

use eth_ecies::crypto::{decrypt, encrypt, EciesError, EncryptOptions, KeyPair};
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;
use std::thread;

const RECIPIENT_PRIV: &str = "d0b043b4c5d657670778242d82d68a29d25d7d711127d17b8e299f156dad361a";
const EPHEMERAL_PRIV: &str = "1f264057916c537739c9a0581914c72cf986abb64d63265929356bc760777749";
const IV: &str = "cb3de3aeef5c4b46465e8057a1c71b94";
const EXPECTED_ENVELOPE: &str = "0420642e5c476a6c0d631b0990c9b1691cf717c0ccb0bdc9fab4a9ffc83784b1c7a8324f30f860fa080ac03bfab2e9e20e8c1eb71e29c7cecee3214501f1096692cb3de3aeef5c4b46465e8057a1c71b947690c3817cb949a4acb38071ad3c9e2eaca126730e6bd7506cf94e27fac82bbf1090bd491c5060466cb91a5da9";

fn hex32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn fixed_options() -> EncryptOptions {
    EncryptOptions::new()
        .with_iv(hex::decode(IV).unwrap().try_into().unwrap())
        .with_ephemeral_private_key(hex32(EPHEMERAL_PRIV))
}

#[test]
fn test_encrypt_produces_at_least_overhead() {
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), b"foo", &EncryptOptions::default()).unwrap();
    assert!(envelope.len() >= 113);
    assert_eq!(envelope.len(), 113 + 3);
    assert_eq!(envelope[0], 0x04, "Ephemeral key must be uncompressed");
}

#[test]
fn test_encrypt_rejects_private_key_as_public_key() {
    let mut private_key = [0u8; 32];
    OsRng.fill_bytes(&mut private_key);

    let result = encrypt(&private_key, b"foo", &EncryptOptions::default());
    assert!(
        matches!(result, Err(EciesError::InvalidPublicKey { .. })),
        "Encryption must fail when a private key is given"
    );
}

#[test]
fn test_encrypt_rejects_prefixed_public_key() {
    let recipient = KeyPair::generate().unwrap();
    let mut prefixed = vec![0x04];
    prefixed.extend_from_slice(recipient.public_key());

    assert!(matches!(
        encrypt(&prefixed, b"foo", &EncryptOptions::default()),
        Err(EciesError::InvalidPublicKey { .. })
    ));
}

#[test]
fn test_roundtrip_returns_same_plaintext() {
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default()).unwrap();
    let decrypted = decrypt(&recipient.private_key()[..], &envelope).unwrap();
    assert_eq!(decrypted, b"spam");
}

#[test]
fn test_roundtrip_longer_message() {
    let mut plaintext = vec![0u8; 1024];
    OsRng.fill_bytes(&mut plaintext);

    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), &plaintext, &EncryptOptions::default()).unwrap();
    assert_eq!(envelope.len(), 113 + 1024);

    let decrypted = decrypt(&recipient.private_key()[..], &envelope).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_roundtrip_empty_message() {
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), b"", &EncryptOptions::default()).unwrap();
    assert_eq!(envelope.len(), 113);

    let decrypted = decrypt(&recipient.private_key()[..], &envelope).unwrap();
    assert!(decrypted.is_empty());
}

#[test]
fn test_ciphertext_is_not_plaintext() {
    let plaintext = b"a message long enough to notice";
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), plaintext, &EncryptOptions::default()).unwrap();

    assert_ne!(envelope.as_slice(), plaintext.as_slice());
    let ciphertext = &envelope[81..envelope.len() - 32];
    assert_ne!(ciphertext, plaintext.as_slice());
}

#[test]
fn test_only_decrypts_with_correct_private_key() {
    let recipient = KeyPair::generate().unwrap();
    let impostor = KeyPair::generate().unwrap();

    let envelope = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default()).unwrap();
    let result = decrypt(&impostor.private_key()[..], &envelope);
    assert_eq!(result, Err(EciesError::MacMismatch));
}

#[test]
fn test_tampered_iv_and_ciphertext_rejected() {
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), b"tamper me", &EncryptOptions::default()).unwrap();
    let mac_offset = envelope.len() - 32;

    // Every bit of the IV and ciphertext region
    for byte in 65..mac_offset {
        for bit in 0..8 {
            let mut tampered = envelope.clone();
            tampered[byte] ^= 1 << bit;
            assert_eq!(
                decrypt(&recipient.private_key()[..], &tampered),
                Err(EciesError::MacMismatch),
                "flip at byte {} bit {} went undetected",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_tampered_mac_rejected() {
    let recipient = KeyPair::generate().unwrap();
    let mut envelope = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default()).unwrap();
    let mac_offset = envelope.len() - 32;
    envelope[mac_offset] ^= 0x80;

    assert_eq!(
        decrypt(&recipient.private_key()[..], &envelope),
        Err(EciesError::MacMismatch)
    );
}

#[test]
fn test_tampered_ephemeral_key_rejected() {
    let recipient = KeyPair::generate().unwrap();
    let envelope = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default()).unwrap();

    let mut bad_prefix = envelope.clone();
    bad_prefix[0] = 0x05;
    assert!(matches!(
        decrypt(&recipient.private_key()[..], &bad_prefix),
        Err(EciesError::InvalidPublicKey { .. })
    ));

    let mut bad_x = envelope.clone();
    bad_x[10] ^= 0x01;
    let result = decrypt(&recipient.private_key()[..], &bad_x);
    assert!(
        matches!(
            result,
            Err(EciesError::InvalidPublicKey { .. }) | Err(EciesError::MacMismatch)
        ),
        "unexpected result: {:?}",
        result
    );
}

#[test]
fn test_deterministic_with_fixed_inputs() {
    let recipient = KeyPair::generate().unwrap();
    let a = encrypt(recipient.public_key(), b"same input", &fixed_options()).unwrap();
    let b = encrypt(recipient.public_key(), b"same input", &fixed_options()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fixed_iv_is_embedded_verbatim() {
    let recipient = KeyPair::generate().unwrap();
    let iv = [0xabu8; 16];
    let envelope = encrypt(
        recipient.public_key(),
        b"spam",
        &EncryptOptions::new().with_iv(iv),
    )
    .unwrap();
    assert_eq!(&envelope[65..81], &iv);
}

#[test]
fn test_matches_cross_implementation_vector() {
    let recipient = KeyPair::from_private_key(&hex32(RECIPIENT_PRIV)).unwrap();

    let envelope = encrypt(recipient.public_key(), b"Hello, world.", &fixed_options()).unwrap();
    assert_eq!(hex::encode(&envelope), EXPECTED_ENVELOPE);
}

#[test]
fn test_decrypts_cross_implementation_vector() {
    let envelope = hex::decode(EXPECTED_ENVELOPE).unwrap();
    let plaintext = decrypt(&hex32(RECIPIENT_PRIV), &envelope).unwrap();
    assert_eq!(plaintext, b"Hello, world.");
}

#[test]
fn test_invalid_private_key_on_decrypt() {
    let envelope = hex::decode(EXPECTED_ENVELOPE).unwrap();
    assert!(matches!(
        decrypt(&[0u8; 32], &envelope),
        Err(EciesError::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        decrypt(&[1u8; 16], &envelope),
        Err(EciesError::InvalidPrivateKey { .. })
    ));
}

#[test]
fn test_parallel_calls_are_independent() {
    let recipient = Arc::new(KeyPair::generate().unwrap());

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let recipient = Arc::clone(&recipient);
            thread::spawn(move || {
                let message = vec![i; 64 + i as usize];
                let envelope =
                    encrypt(recipient.public_key(), &message, &EncryptOptions::default()).unwrap();
                let decrypted = decrypt(&recipient.private_key()[..], &envelope).unwrap();
                assert_eq!(decrypted, message);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
