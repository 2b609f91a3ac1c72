// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use std::io::Write;
use zeroize::Zeroizing;

use crate::crypto::{load_private_key_from_env, parse_hex_key, KeyPair};

/// Arguments for public-key command
#[derive(Args, Debug)]
pub struct PublicKeyArgs {
    /// Private key as hex (falls back to ECIES_PRIVATE_KEY env var)
    #[arg(long)]
    pub private_key: Option<String>,
}

/// Generate a key pair and print it
pub fn keygen<W: Write>(out: &mut W) -> Result<()> {
    let pair = KeyPair::generate()?;
    print_key_pair(&pair, true, out)
}

/// Print the public half of an existing private key
pub fn public_key<W: Write>(args: PublicKeyArgs, out: &mut W) -> Result<()> {
    let private_key = resolve_private_key(args.private_key.as_deref())?;
    let pair = KeyPair::from_private_key(&private_key[..])?;
    print_key_pair(&pair, false, out)
}

pub(crate) fn resolve_private_key(arg: Option<&str>) -> Result<Zeroizing<[u8; 32]>> {
    match arg {
        Some(hex_key) => parse_hex_key::<32>(hex_key),
        None => load_private_key_from_env(),
    }
}

fn print_key_pair<W: Write>(pair: &KeyPair, include_private: bool, out: &mut W) -> Result<()> {
    if include_private {
        writeln!(out, "private_key: 0x{}", hex::encode(&pair.private_key()[..]))?;
    }
    writeln!(out, "public_key:  0x{}", hex::encode(pair.public_key()))?;
    writeln!(out, "address:     {}", pair.address())?;
    Ok(())
}
