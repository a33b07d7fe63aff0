//! Cryptographic operations
//!
//! This module provides functionality for mnemonic generation, key
//! derivation, and passphrase-based encryption of wallet secrets.

pub mod mnemonic;
pub mod keys;
pub mod cipher;

pub use mnemonic::*;
pub use keys::*;
pub use cipher::*;
