// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Concatenation KDF (NIST SP 800-56, section 5.8.1)
//!
//! A single SHA-256 block is enough for the 32 bytes of key material:
//!
//! ```text
//! digest  = SHA256(0x00000001 || shared_secret)
//! enc_key = digest[0..16]
//! mac_key = SHA256(digest[16..32])
//! ```
//!
//! The MAC key is the hash of the second half, not the half itself. Ethereum's
//! ECIES does the same and the two must stay byte-compatible.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// AES-128 key length
pub const ENCRYPTION_KEY_LEN: usize = 16;

/// HMAC-SHA256 key length
pub const MAC_KEY_LEN: usize = 32;

const COUNTER: [u8; 4] = 1u32.to_be_bytes();

/// Encryption and MAC keys derived from one shared secret
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    encryption_key: [u8; ENCRYPTION_KEY_LEN],
    mac_key: [u8; MAC_KEY_LEN],
}

impl DerivedKeys {
    pub fn encryption_key(&self) -> &[u8; ENCRYPTION_KEY_LEN] {
        &self.encryption_key
    }

    pub fn mac_key(&self) -> &[u8; MAC_KEY_LEN] {
        &self.mac_key
    }
}

impl std::fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKeys").finish_non_exhaustive()
    }
}

/// Single-round concatenation KDF over SHA-256
pub fn concat_kdf(shared_secret: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut hasher = Sha256::new();
    hasher.update(COUNTER);
    hasher.update(shared_secret);
    Zeroizing::new(hasher.finalize().into())
}

/// Expand a shared secret into the encryption and MAC keys
pub fn derive_keys(shared_secret: &[u8]) -> DerivedKeys {
    let digest = concat_kdf(shared_secret);

    let mut encryption_key = [0u8; ENCRYPTION_KEY_LEN];
    encryption_key.copy_from_slice(&digest[..ENCRYPTION_KEY_LEN]);

    let mac_key: [u8; MAC_KEY_LEN] = Sha256::digest(&digest[ENCRYPTION_KEY_LEN..]).into();

    DerivedKeys {
        encryption_key,
        mac_key,
    }
}
