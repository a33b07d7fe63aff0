//! Account management functionality
//!
//! This module builds the dual-chain accounts handed back to the caller:
//! one EVM account and one Cosmos account derived from a shared mnemonic or
//! raw private key.

mod wallet;

pub use wallet::*;
