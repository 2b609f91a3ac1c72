// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECDH Key Agreement
//!
//! Implements Elliptic Curve Diffie-Hellman over secp256k1 (the same curve
//! used by Ethereum). The shared secret is the X coordinate of
//! `remote_public * local_private`, as a fixed 32-byte big-endian string.
//!
//! Public keys arrive in two shapes:
//! - 64 bytes `X || Y`, the Ethereum account form used by callers
//! - 65 bytes `0x04 || X || Y`, the SEC1 uncompressed form carried in envelopes

use k256::{
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
    EncodedPoint, PublicKey, Scalar, SecretKey,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::error::EciesError;

/// Length of an Ethereum-style public key (no format byte)
pub const ETHEREUM_PUBLIC_KEY_LEN: usize = 64;

/// Length of a SEC1 uncompressed public key
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Length of a secp256k1 private scalar
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of the shared secret (X coordinate)
pub const SHARED_SECRET_LEN: usize = 32;

const UNCOMPRESSED_TAG: u8 = 0x04;

/// X coordinate of the ECDH result point, cleared on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_LEN]);

impl SharedSecret {
    /// Raw 32-byte big-endian X coordinate
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Parse a 65-byte SEC1 uncompressed public key (`0x04 || X || Y`)
///
/// # Errors
///
/// Returns `InvalidPublicKey` if:
/// - Key is not exactly 65 bytes
/// - First byte is not the uncompressed tag `0x04`
/// - Coordinates are not a point on secp256k1
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, EciesError> {
    if bytes.len() != UNCOMPRESSED_PUBLIC_KEY_LEN {
        return Err(EciesError::invalid_public_key(format!(
            "expected {} bytes, got {}",
            UNCOMPRESSED_PUBLIC_KEY_LEN,
            bytes.len()
        )));
    }

    if bytes[0] != UNCOMPRESSED_TAG {
        return Err(EciesError::invalid_public_key(format!(
            "expected uncompressed point prefix 0x04, got 0x{:02x}",
            bytes[0]
        )));
    }

    let encoded_point = EncodedPoint::from_bytes(bytes)
        .map_err(|e| EciesError::invalid_public_key(format!("sec1 decode error: {}", e)))?;

    Option::<PublicKey>::from(PublicKey::from_encoded_point(&encoded_point))
        .ok_or_else(|| EciesError::invalid_public_key("point is not on secp256k1"))
}

/// Parse a 64-byte Ethereum public key (`X || Y`)
///
/// The key is re-expanded to the SEC1 form with a `0x04` prefix before
/// decoding. A 32-byte private key passed here by mistake is rejected.
pub fn parse_ethereum_public_key(bytes: &[u8]) -> Result<PublicKey, EciesError> {
    if bytes.len() != ETHEREUM_PUBLIC_KEY_LEN {
        return Err(EciesError::invalid_public_key(format!(
            "expected {} bytes, got {}",
            ETHEREUM_PUBLIC_KEY_LEN,
            bytes.len()
        )));
    }

    let mut sec1 = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
    sec1[0] = UNCOMPRESSED_TAG;
    sec1[1..].copy_from_slice(bytes);

    parse_public_key(&sec1)
}

/// Parse a 32-byte secp256k1 private key
///
/// # Errors
///
/// Returns `InvalidPrivateKey` if the key is not 32 bytes, is zero, or is not
/// below the curve order.
pub fn parse_private_key(bytes: &[u8]) -> Result<SecretKey, EciesError> {
    // from_slice left-pads short input, so the length is pinned here
    if bytes.len() != PRIVATE_KEY_LEN {
        return Err(EciesError::invalid_private_key(format!(
            "expected {} bytes, got {}",
            PRIVATE_KEY_LEN,
            bytes.len()
        )));
    }

    SecretKey::from_slice(bytes)
        .map_err(|_| EciesError::invalid_private_key("scalar is zero or exceeds curve order"))
}

/// Encode a public key in the 65-byte SEC1 uncompressed form
pub fn encode_uncompressed(public_key: &PublicKey) -> [u8; UNCOMPRESSED_PUBLIC_KEY_LEN] {
    let encoded = public_key.to_encoded_point(false);
    let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
    out.copy_from_slice(encoded.as_bytes());
    out
}

/// Derive the ECDH shared secret
///
/// Multiplies `remote_public` by `local_private` and returns the X coordinate
/// of the result.
///
/// # Errors
///
/// Returns `InvalidPublicKey` if the product is the point at infinity.
pub fn agree(
    local_private: &SecretKey,
    remote_public: &PublicKey,
) -> Result<SharedSecret, EciesError> {
    let scalar: Scalar = *local_private.to_nonzero_scalar();
    let shared_point = (remote_public.to_projective() * scalar).to_affine();

    // The identity encodes as a single 0x00 byte and has no X coordinate
    let encoded = shared_point.to_encoded_point(false);
    let x = encoded.x().ok_or_else(|| {
        EciesError::invalid_public_key("key agreement produced the point at infinity")
    })?;

    let mut secret = [0u8; SHARED_SECRET_LEN];
    secret.copy_from_slice(x);
    Ok(SharedSecret(secret))
}
