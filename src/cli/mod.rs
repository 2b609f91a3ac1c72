// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod keys;
pub mod message;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// ECIES CLI
#[derive(Parser, Debug)]
#[command(name = "ecies-cli")]
#[command(version)]
#[command(about = "Encrypt and decrypt messages to Ethereum public keys (ECIES/secp256k1)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new key pair
    Keygen,

    /// Print the public key and address for a private key
    PublicKey(keys::PublicKeyArgs),

    /// Encrypt a message to a public key
    Encrypt(message::EncryptArgs),

    /// Decrypt an envelope with a private key
    Decrypt(message::DecryptArgs),
}

/// Envelope encoding on disk / stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Lowercase hex, one line
    #[default]
    Hex,
    /// Raw bytes
    Binary,
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Keygen => keys::keygen(&mut io::stdout().lock()),
        Commands::PublicKey(args) => keys::public_key(args, &mut io::stdout().lock()),
        Commands::Encrypt(args) => message::encrypt(args),
        Commands::Decrypt(args) => message::decrypt(args),
    }
}

pub(crate) fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub(crate) fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

pub(crate) fn decode_hex_input(input: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(input).map_err(|_| anyhow!("Hex input is not valid UTF-8"))?;
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).map_err(|e| anyhow!("Invalid hex input: {}", e))
}
