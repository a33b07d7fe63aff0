//! Error types for the wallet-tools library

use thiserror::Error;

/// Custom error type for wallet-tools operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Invalid address prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid bech32 address: {0}")]
    InvalidBech32(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption failed - wrong key or corrupted data")]
    DecryptionFailed,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for wallet-tools operations
pub type Result<T> = std::result::Result<T, Error>;
