// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod crypto;

// Re-export main types
pub use crypto::{decrypt, encrypt, encrypt_with_rng, EciesError, EncryptOptions, Envelope, KeyPair};
