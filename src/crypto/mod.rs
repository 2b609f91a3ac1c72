// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECIES over secp256k1 with Ethereum keys
//!
//! This module implements the primitives and the envelope for encrypting a
//! message to an Ethereum public key:
//!
//! - **ECDH**: Ephemeral-static key agreement on secp256k1
//! - **KDF**: NIST SP 800-56 concatenation KDF over SHA-256
//! - **Cipher**: AES-128-CTR
//! - **MAC**: HMAC-SHA256 over `iv || ciphertext`
//! - **Envelope**: `ephemeral public (65) || iv (16) || ciphertext || mac (32)`
//!
//! ## Security Considerations
//!
//! - The MAC is verified before decryption; on mismatch no plaintext is released
//! - Private keys, shared secrets and derived keys are zeroized on drop
//! - Tags are compared in constant time
//! - Every call is independent; there is no shared state besides the RNG
//!
//! ## Protocol Flow
//!
//! 1. Sender generates an ephemeral keypair and performs ECDH with the recipient's public key
//! 2. Sender derives an AES key and a MAC key from the shared X coordinate
//! 3. Sender encrypts with AES-128-CTR under a random IV and MACs `iv || ciphertext`
//! 4. Recipient performs ECDH with the ephemeral public key from the envelope
//! 5. Recipient re-derives both keys, verifies the MAC, then decrypts

pub mod aes_ctr;
pub mod ecdh;
pub mod ecies;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod keys;
pub mod mac;
pub mod private_key;

pub use ecdh::{agree, parse_ethereum_public_key, parse_private_key, parse_public_key, SharedSecret};
pub use ecies::{decrypt, encrypt, encrypt_with_rng, EncryptOptions};
pub use envelope::{Envelope, ENVELOPE_OVERHEAD};
pub use error::EciesError;
pub use kdf::{derive_keys, DerivedKeys};
pub use keys::{ethereum_address, public_key_from_private, KeyPair};
pub use private_key::{load_private_key_from_env, parse_hex_key, PRIVATE_KEY_ENV};
