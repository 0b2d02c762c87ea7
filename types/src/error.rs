//! Error types shared across crates.

use thiserror::Error;

/// Failure to interpret a chain decimal carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecError {
    #[error("malformed decimal value {0:?}")]
    Malformed(String),
}

/// Failure to derive a validator's consensus address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsAddrError {
    #[error("validator has no consensus pubkey")]
    MissingPubkey,

    #[error("consensus pubkey is not valid base64: {0}")]
    KeyEncoding(String),

    #[error("bech32 encoding failed: {0}")]
    Bech32(String),
}
