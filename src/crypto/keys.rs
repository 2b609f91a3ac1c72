// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ethereum Key Pairs
//!
//! Helpers for the 32-byte private key / 64-byte public key encoding used by
//! Ethereum accounts, plus address derivation (Keccak-256 of the public key,
//! last 20 bytes).

use k256::SecretKey;
use rand::{CryptoRng, RngCore};
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroizing;

use super::ecdh::{
    encode_uncompressed, parse_private_key, ETHEREUM_PUBLIC_KEY_LEN, PRIVATE_KEY_LEN,
};
use super::error::EciesError;

/// A secp256k1 key pair in Ethereum encoding
///
/// The private half is held in a [`SecretKey`], which clears itself on drop.
#[derive(Clone)]
pub struct KeyPair {
    secret: SecretKey,
    public_key: [u8; ETHEREUM_PUBLIC_KEY_LEN],
}

impl KeyPair {
    /// Generate a key pair from the operating system's CSPRNG
    pub fn generate() -> Result<Self, EciesError> {
        Self::generate_with_rng(&mut rand::rngs::OsRng)
    }

    /// Generate a key pair from the given random source
    ///
    /// Draws 32 bytes at a time and retries only when they fall outside the
    /// scalar range. A failing source is reported, never retried.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, EciesError> {
        let secret = random_secret_key(rng)?;
        Ok(Self::from_secret(secret))
    }

    /// Build a key pair from a raw 32-byte private key
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, EciesError> {
        let secret = parse_private_key(private_key)?;
        Ok(Self::from_secret(secret))
    }

    fn from_secret(secret: SecretKey) -> Self {
        let sec1 = encode_uncompressed(&secret.public_key());
        let mut public_key = [0u8; ETHEREUM_PUBLIC_KEY_LEN];
        public_key.copy_from_slice(&sec1[1..]);
        Self { secret, public_key }
    }

    /// Raw 32-byte private key
    pub fn private_key(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        Zeroizing::new(self.secret.to_bytes().into())
    }

    /// 64-byte public key (`X || Y`)
    pub fn public_key(&self) -> &[u8; ETHEREUM_PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Checksum-free `0x`-prefixed Ethereum address
    pub fn address(&self) -> String {
        ethereum_address(&self.public_key)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

pub(crate) fn random_secret_key<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<SecretKey, EciesError> {
    let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
    loop {
        rng.try_fill_bytes(&mut candidate[..])?;
        if let Ok(secret) = SecretKey::from_slice(&candidate[..]) {
            return Ok(secret);
        }
    }
}

/// Derive the 64-byte Ethereum public key from a 32-byte private key
pub fn public_key_from_private(
    private_key: &[u8],
) -> Result<[u8; ETHEREUM_PUBLIC_KEY_LEN], EciesError> {
    Ok(*KeyPair::from_private_key(private_key)?.public_key())
}

/// Derive the Ethereum address for a 64-byte public key
pub fn ethereum_address(public_key: &[u8; ETHEREUM_PUBLIC_KEY_LEN]) -> String {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(public_key);
    hasher.finalize(&mut hash);

    // Address is last 20 bytes of hash
    format!("0x{}", hex::encode(&hash[12..]))
}
