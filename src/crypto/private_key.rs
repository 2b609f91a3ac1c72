// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recipient Private Key Loading
//!
//! Reads the recipient's decryption key from the `ECIES_PRIVATE_KEY`
//! environment variable and parses hex-encoded keys given on the command line.
//!
//! ## Security Considerations
//!
//! - Environment keys must be a 32-byte hex string with "0x" prefix
//! - Key is NEVER logged or persisted
//! - Decoded bytes are zeroized when dropped
//!
//! ## Usage
//!
//! ```no_run
//! use eth_ecies::crypto::load_private_key_from_env;
//!
//! let key = load_private_key_from_env()?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{anyhow, Result};
use std::env;
use tracing::info;
use zeroize::Zeroizing;

use super::ecdh::{parse_private_key, PRIVATE_KEY_LEN};

/// Environment variable holding the recipient private key
pub const PRIVATE_KEY_ENV: &str = "ECIES_PRIVATE_KEY";

/// Decode a hex key of exactly `N` bytes
///
/// Surrounding whitespace and an optional `0x` prefix are accepted.
pub fn parse_hex_key<const N: usize>(input: &str) -> Result<Zeroizing<[u8; N]>> {
    let trimmed = input.trim();
    let hex_str = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    if hex_str.len() != N * 2 {
        return Err(anyhow!(
            "Key must be exactly {} hex characters ({} bytes), got {} characters",
            N * 2,
            N,
            hex_str.len()
        ));
    }

    let mut key = Zeroizing::new([0u8; N]);
    hex::decode_to_slice(hex_str, &mut key[..])
        .map_err(|e| anyhow!("Key contains invalid hex characters: {}", e))?;

    Ok(key)
}

/// Load the recipient private key from `ECIES_PRIVATE_KEY`
///
/// # Errors
///
/// - Variable not set or empty
/// - Key doesn't start with "0x" prefix
/// - Key is not 64 hex characters
/// - Key is not a valid secp256k1 scalar
pub fn load_private_key_from_env() -> Result<Zeroizing<[u8; PRIVATE_KEY_LEN]>> {
    let key_str = Zeroizing::new(
        env::var(PRIVATE_KEY_ENV)
            .map_err(|_| anyhow!("{} environment variable not set", PRIVATE_KEY_ENV))?,
    );
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(anyhow!("{} is empty", PRIVATE_KEY_ENV));
    }

    if !key_str.starts_with("0x") {
        return Err(anyhow!(
            "{} must start with '0x' prefix (Ethereum format)",
            PRIVATE_KEY_ENV
        ));
    }

    let key = parse_hex_key::<PRIVATE_KEY_LEN>(key_str)
        .map_err(|e| anyhow!("{}: {}", PRIVATE_KEY_ENV, e))?;
    parse_private_key(&key[..]).map_err(|e| anyhow!("{}: {}", PRIVATE_KEY_ENV, e))?;

    // Log success WITHOUT logging the actual key
    info!("Recipient private key loaded from {} (32 bytes)", PRIVATE_KEY_ENV);

    Ok(key)
}
