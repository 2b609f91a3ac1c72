// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HMAC-SHA256 Envelope Authentication
//!
//! The tag covers `iv || ciphertext` only. The ephemeral public key and the
//! tag itself are not part of the MAC input.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::kdf::MAC_KEY_LEN;

/// HMAC-SHA256 tag length
pub const MAC_LEN: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 over `data`
pub fn compute_mac(mac_key: &[u8; MAC_KEY_LEN], data: &[u8]) -> [u8; MAC_LEN] {
    let mut mac = HmacSha256::new_from_slice(mac_key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Recompute the tag over `data` and compare it with `expected_tag`
///
/// Returns `false` for a tag of the wrong length without comparing bytes.
pub fn verify_mac(mac_key: &[u8; MAC_KEY_LEN], data: &[u8], expected_tag: &[u8]) -> bool {
    let computed = compute_mac(mac_key, data);
    constant_time_eq(&computed, expected_tag)
}

/// Length-checked constant-time equality
///
/// Lengths are public and compared first; the byte comparison then folds
/// every position without short-circuiting.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
