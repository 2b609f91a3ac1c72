// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ECIES Error Types
//!
//! Every failure in the encrypt/decrypt pipeline is reported as one of the
//! variants below. Callers match on the variant, never on the message text.
//!
//! ## Error Variants
//!
//! - **InvalidPublicKey**: key bytes are not a secp256k1 point (wrong length,
//!   wrong prefix, off-curve, identity)
//! - **InvalidPrivateKey**: scalar is the wrong length, zero, or not below the
//!   curve order
//! - **MalformedEnvelope**: envelope is shorter than 113 bytes
//! - **MacMismatch**: the envelope failed authentication (tampered, or
//!   encrypted to a different key)
//! - **RandomSourceFailure**: the secure random source could not supply bytes
//!
//! `MacMismatch` is security relevant; `MalformedEnvelope` and the key
//! variants usually point at a caller bug.
//!
//! ## Usage Example
//!
//! ```rust
//! use eth_ecies::crypto::{decrypt, EciesError};
//!
//! let private_key = [7u8; 32];
//! match decrypt(&private_key, &[0u8; 12]) {
//!     Err(EciesError::MalformedEnvelope { .. }) => {}
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Error type for all ECIES operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EciesError {
    /// Public key bytes do not decode to a usable curve point
    #[error("Invalid public key: {reason}")]
    InvalidPublicKey {
        /// Specific failure reason
        reason: String,
    },

    /// Private key bytes are not a valid non-zero secp256k1 scalar
    #[error("Invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Specific failure reason
        reason: String,
    },

    /// Envelope is too short to hold the fixed-size fields
    #[error("Malformed envelope: {reason}")]
    MalformedEnvelope {
        /// Specific failure reason
        reason: String,
    },

    /// Recomputed MAC does not match the envelope's MAC
    ///
    /// Carries no detail on purpose: nothing about the expected tag or the
    /// plaintext is exposed.
    #[error("MAC mismatch")]
    MacMismatch,

    /// Secure random generator could not supply the requested bytes
    #[error("Random source failure: {reason}")]
    RandomSourceFailure {
        /// Specific failure reason
        reason: String,
    },
}

impl EciesError {
    pub(crate) fn invalid_public_key(reason: impl Into<String>) -> Self {
        EciesError::InvalidPublicKey {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_private_key(reason: impl Into<String>) -> Self {
        EciesError::InvalidPrivateKey {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_envelope(reason: impl Into<String>) -> Self {
        EciesError::MalformedEnvelope {
            reason: reason.into(),
        }
    }

    /// True when the error signals an integrity failure rather than bad input
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, EciesError::MacMismatch)
    }
}

// Conversion from rand errors (OsRng / injected RNG)
impl From<rand::Error> for EciesError {
    fn from(err: rand::Error) -> Self {
        EciesError::RandomSourceFailure {
            reason: format!("rng error: {}", err),
        }
    }
}
