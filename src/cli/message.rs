// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::keys::resolve_private_key;
use super::{decode_hex_input, read_input, write_output, Format};
use crate::crypto::{self, EciesError, EncryptOptions};

/// Arguments for encrypt command
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Recipient public key as hex (64 bytes, no 0x04 prefix)
    #[arg(long, env = "ECIES_PUBLIC_KEY")]
    pub public_key: String,

    /// Plaintext file (defaults to stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Envelope output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Envelope encoding
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    pub format: Format,
}

/// Arguments for decrypt command
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Private key as hex (falls back to ECIES_PRIVATE_KEY env var)
    #[arg(long)]
    pub private_key: Option<String>,

    /// Envelope file (defaults to stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Plaintext output file (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Envelope encoding
    #[arg(long, value_enum, default_value_t = Format::Hex)]
    pub format: Format,
}

/// Encrypt a file or stdin to the recipient's public key
pub fn encrypt(args: EncryptArgs) -> Result<()> {
    let public_key = decode_hex_input(args.public_key.as_bytes())?;
    let plaintext = read_input(args.input.as_deref())?;

    let envelope = crypto::encrypt(&public_key, &plaintext, &EncryptOptions::default())?;
    info!("Encrypted {} bytes into {}-byte envelope", plaintext.len(), envelope.len());

    let encoded = match args.format {
        Format::Hex => format!("{}\n", hex::encode(&envelope)).into_bytes(),
        Format::Binary => envelope,
    };
    write_output(args.output.as_deref(), &encoded)
}

/// Decrypt a file or stdin with the recipient's private key
pub fn decrypt(args: DecryptArgs) -> Result<()> {
    let private_key = resolve_private_key(args.private_key.as_deref())?;
    let raw = read_input(args.input.as_deref())?;

    let envelope = match args.format {
        Format::Hex => decode_hex_input(&raw)?,
        Format::Binary => raw,
    };

    let plaintext = crypto::decrypt(&private_key[..], &envelope).map_err(|e| match e {
        EciesError::MacMismatch => {
            anyhow!("Envelope failed authentication (wrong key or tampered data)")
        }
        other => anyhow::Error::new(other),
    })?;
    info!("Decrypted {}-byte envelope", envelope.len());

    write_output(args.output.as_deref(), &plaintext)
}
