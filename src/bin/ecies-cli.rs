// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use eth_ecies::cli::{execute, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Pick up ECIES_PRIVATE_KEY / ECIES_PUBLIC_KEY from .env when present
    dotenv::dotenv().ok();

    // Logs go to stderr at warn by default so stdout carries only output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute the command
    match execute(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
