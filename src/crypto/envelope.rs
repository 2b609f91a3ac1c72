// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECIES Envelope Codec
//!
//! **Wire Format**:
//! ```text
//! [ephemeral public key (65) | iv (16) | ciphertext (N) | mac (32)]
//! ```
//!
//! - Ephemeral public key: SEC1 uncompressed point `0x04 || X || Y`
//! - IV: initial AES-128-CTR counter block
//! - Ciphertext: same length as the plaintext
//! - MAC: HMAC-SHA256 over `iv || ciphertext`
//!
//! Decoding only slices; it does not validate the point. That happens in
//! key agreement.

use tracing::warn;

use super::aes_ctr::IV_LEN;
use super::ecdh::UNCOMPRESSED_PUBLIC_KEY_LEN;
use super::error::EciesError;
use super::mac::MAC_LEN;

/// Length of the ephemeral public key field
pub const EPHEMERAL_PUBLIC_KEY_LEN: usize = UNCOMPRESSED_PUBLIC_KEY_LEN;

/// Fixed bytes around the ciphertext (65 + 16 + 32)
pub const ENVELOPE_OVERHEAD: usize = EPHEMERAL_PUBLIC_KEY_LEN + IV_LEN + MAC_LEN;

const IV_OFFSET: usize = EPHEMERAL_PUBLIC_KEY_LEN;
const CIPHERTEXT_OFFSET: usize = IV_OFFSET + IV_LEN;

/// Borrowed view over the four envelope fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub ephemeral_public_key: &'a [u8; EPHEMERAL_PUBLIC_KEY_LEN],
    pub iv: &'a [u8; IV_LEN],
    pub ciphertext: &'a [u8],
    pub mac: &'a [u8; MAC_LEN],
}

impl<'a> Envelope<'a> {
    /// Split serialized bytes into envelope fields
    ///
    /// # Errors
    ///
    /// Returns `MalformedEnvelope` if `bytes` is shorter than 113 bytes.
    pub fn decode(bytes: &'a [u8]) -> Result<Self, EciesError> {
        if bytes.len() < ENVELOPE_OVERHEAD {
            warn!(
                "Rejecting envelope of {} bytes (minimum {})",
                bytes.len(),
                ENVELOPE_OVERHEAD
            );
            return Err(EciesError::malformed_envelope(format!(
                "expected at least {} bytes, got {}",
                ENVELOPE_OVERHEAD,
                bytes.len()
            )));
        }

        let mac_offset = bytes.len() - MAC_LEN;
        let (ephemeral_public_key, rest) = bytes.split_at(IV_OFFSET);
        let (iv, rest) = rest.split_at(IV_LEN);
        let (ciphertext, mac) = rest.split_at(mac_offset - CIPHERTEXT_OFFSET);

        Ok(Envelope {
            ephemeral_public_key: fixed(ephemeral_public_key, "ephemeral public key")?,
            iv: fixed(iv, "iv")?,
            ciphertext,
            mac: fixed(mac, "mac")?,
        })
    }

    /// Serialize the fields in wire order
    pub fn encode(&self) -> Vec<u8> {
        encode_envelope(self.ephemeral_public_key, self.iv, self.ciphertext, self.mac)
    }

    /// Bytes covered by the MAC: `iv || ciphertext`
    pub fn mac_input(&self) -> Vec<u8> {
        mac_input(self.iv, self.ciphertext)
    }

    /// Plaintext length carried by an envelope of `total_len` bytes
    pub fn plaintext_len(total_len: usize) -> Option<usize> {
        total_len.checked_sub(ENVELOPE_OVERHEAD)
    }
}

fn fixed<'a, const N: usize>(slice: &'a [u8], field: &str) -> Result<&'a [u8; N], EciesError> {
    slice.try_into().map_err(|_| {
        EciesError::malformed_envelope(format!(
            "{} field is {} bytes, expected {}",
            field,
            slice.len(),
            N
        ))
    })
}

/// Concatenate `ephemeral_public_key || iv || ciphertext || mac`
pub fn encode_envelope(
    ephemeral_public_key: &[u8; EPHEMERAL_PUBLIC_KEY_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
    mac: &[u8; MAC_LEN],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENVELOPE_OVERHEAD + ciphertext.len());
    out.extend_from_slice(ephemeral_public_key);
    out.extend_from_slice(iv);
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(mac);
    out
}

/// Build the MAC input `iv || ciphertext`
pub fn mac_input(iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(IV_LEN + ciphertext.len());
    data.extend_from_slice(iv);
    data.extend_from_slice(ciphertext);
    data
}
