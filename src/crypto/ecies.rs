// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECIES Encrypt / Decrypt
//!
//! Composes key agreement, KDF, AES-128-CTR and HMAC-SHA256 into the
//! Ethereum-compatible envelope.
//!
//! ## Encryption
//!
//! 1. Generate (or accept) an ephemeral key pair
//! 2. ECDH(ephemeral private, recipient public) -> shared secret
//! 3. Concat-KDF -> encryption key, MAC key
//! 4. AES-128-CTR encrypt the plaintext
//! 5. HMAC-SHA256 over `iv || ciphertext`
//! 6. Serialize `ephemeral public || iv || ciphertext || mac`
//!
//! ## Decryption
//!
//! The mirror image, except that the MAC is verified before anything is
//! decrypted. On `MacMismatch` no plaintext is produced at all.

use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::aes_ctr::{decrypt_aes_ctr, encrypt_aes_ctr, IV_LEN};
use super::ecdh::{
    agree, encode_uncompressed, parse_ethereum_public_key, parse_private_key, parse_public_key,
    PRIVATE_KEY_LEN,
};
use super::envelope::{encode_envelope, mac_input, Envelope, ENVELOPE_OVERHEAD};
use super::error::EciesError;
use super::kdf::derive_keys;
use super::keys::random_secret_key;
use super::mac::{compute_mac, verify_mac};

/// Optional deterministic inputs for [`encrypt`]
///
/// Both fields default to fresh randomness. Fixing them is only meant for
/// reproducible test vectors: reusing an IV with the same ephemeral key
/// leaks the XOR of the plaintexts.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct EncryptOptions {
    iv: Option<[u8; IV_LEN]>,
    ephemeral_private_key: Option<[u8; PRIVATE_KEY_LEN]>,
}

impl EncryptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed 16-byte IV
    pub fn with_iv(mut self, iv: [u8; IV_LEN]) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Use a fixed 32-byte ephemeral private key
    pub fn with_ephemeral_private_key(mut self, key: [u8; PRIVATE_KEY_LEN]) -> Self {
        self.ephemeral_private_key = Some(key);
        self
    }

    pub fn iv(&self) -> Option<&[u8; IV_LEN]> {
        self.iv.as_ref()
    }
}

impl std::fmt::Debug for EncryptOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptOptions")
            .field("iv", &self.iv.map(hex::encode))
            .field(
                "ephemeral_private_key",
                &self.ephemeral_private_key.map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Encrypt `plaintext` to a 64-byte Ethereum public key
///
/// Missing IV / ephemeral key are drawn from the OS CSPRNG.
///
/// # Errors
///
/// - `InvalidPublicKey` if `public_key` is not a 64-byte secp256k1 point
/// - `InvalidPrivateKey` if a supplied ephemeral key is not a valid scalar
/// - `RandomSourceFailure` if the OS random source fails
///
/// # Example
///
/// ```rust
/// use eth_ecies::crypto::{decrypt, encrypt, EncryptOptions, KeyPair};
///
/// let recipient = KeyPair::generate()?;
/// let envelope = encrypt(recipient.public_key(), b"spam", &EncryptOptions::default())?;
/// assert_eq!(envelope.len(), 113 + 4);
///
/// let plaintext = decrypt(&recipient.private_key()[..], &envelope)?;
/// assert_eq!(plaintext, b"spam");
/// # Ok::<(), eth_ecies::crypto::EciesError>(())
/// ```
pub fn encrypt(
    public_key: &[u8],
    plaintext: &[u8],
    options: &EncryptOptions,
) -> Result<Vec<u8>, EciesError> {
    encrypt_with_rng(public_key, plaintext, options, &mut OsRng)
}

/// [`encrypt`] with an injected random source
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    public_key: &[u8],
    plaintext: &[u8],
    options: &EncryptOptions,
    rng: &mut R,
) -> Result<Vec<u8>, EciesError> {
    // 1. Recipient key is validated before any entropy is drawn
    let recipient = parse_ethereum_public_key(public_key)?;

    // 2. Ephemeral key pair
    let ephemeral = match &options.ephemeral_private_key {
        Some(key) => parse_private_key(key)?,
        None => random_secret_key(rng)?,
    };
    let ephemeral_public = encode_uncompressed(&ephemeral.public_key());

    // 3. IV
    let iv = match options.iv {
        Some(iv) => iv,
        None => {
            let mut iv = [0u8; IV_LEN];
            rng.try_fill_bytes(&mut iv)?;
            iv
        }
    };

    // 4. Key agreement + KDF
    let shared_secret = agree(&ephemeral, &recipient)?;
    let keys = derive_keys(shared_secret.as_bytes());

    // 5. Encrypt and authenticate
    let ciphertext = encrypt_aes_ctr(&iv, keys.encryption_key(), plaintext);
    let mac = compute_mac(keys.mac_key(), &mac_input(&iv, &ciphertext));

    debug!(
        "ECIES encrypted {} bytes (envelope {} bytes)",
        plaintext.len(),
        plaintext.len() + ENVELOPE_OVERHEAD
    );

    Ok(encode_envelope(&ephemeral_public, &iv, &ciphertext, &mac))
}

/// Decrypt an envelope with the recipient's 32-byte private key
///
/// # Errors
///
/// - `MalformedEnvelope` if the envelope is shorter than 113 bytes
/// - `InvalidPrivateKey` if `private_key` is not a valid scalar
/// - `InvalidPublicKey` if the embedded ephemeral key is not a curve point
/// - `MacMismatch` if authentication fails; nothing is decrypted in that case
pub fn decrypt(private_key: &[u8], envelope: &[u8]) -> Result<Vec<u8>, EciesError> {
    // 1. Structure before any cryptographic work
    let envelope = Envelope::decode(envelope)?;

    let recipient = parse_private_key(private_key)?;
    let ephemeral_public = parse_public_key(envelope.ephemeral_public_key)?;

    // 2. Key agreement + KDF
    let shared_secret = agree(&recipient, &ephemeral_public)?;
    let keys = derive_keys(shared_secret.as_bytes());

    // 3. Authenticate, then decrypt
    if !verify_mac(keys.mac_key(), &envelope.mac_input(), envelope.mac) {
        warn!(
            "ECIES MAC mismatch on {}-byte ciphertext",
            envelope.ciphertext.len()
        );
        return Err(EciesError::MacMismatch);
    }

    let plaintext = decrypt_aes_ctr(envelope.iv, keys.encryption_key(), envelope.ciphertext);
    debug!("ECIES decrypted {} bytes", plaintext.len());

    Ok(plaintext)
}
