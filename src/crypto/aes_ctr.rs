// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AES-128-CTR Stream Encryption
//!
//! The 16-byte IV is the initial counter block and the whole block is
//! incremented as a 128-bit big-endian integer, matching OpenSSL's
//! `aes-128-ctr`. Output length always equals input length.
//!
//! CTR mode provides no integrity. A wrong key or IV produces garbage of the
//! right length, never an error; the MAC is what catches that.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};

use super::kdf::ENCRYPTION_KEY_LEN;

/// IV / initial counter block length
pub const IV_LEN: usize = 16;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

fn apply_keystream(iv: &[u8; IV_LEN], key: &[u8; ENCRYPTION_KEY_LEN], data: &[u8]) -> Vec<u8> {
    let mut buffer = data.to_vec();
    let mut cipher = Aes128Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buffer);
    buffer
}

/// Encrypt `plaintext` under AES-128-CTR
pub fn encrypt_aes_ctr(
    iv: &[u8; IV_LEN],
    key: &[u8; ENCRYPTION_KEY_LEN],
    plaintext: &[u8],
) -> Vec<u8> {
    apply_keystream(iv, key, plaintext)
}

/// Decrypt `ciphertext` under AES-128-CTR
pub fn decrypt_aes_ctr(
    iv: &[u8; IV_LEN],
    key: &[u8; ENCRYPTION_KEY_LEN],
    ciphertext: &[u8],
) -> Vec<u8> {
    apply_keystream(iv, key, ciphertext)
}
