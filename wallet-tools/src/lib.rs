//! Wallet Tools Core
//!
//! This library provides the core operations behind the wallet tools
//! application: BIP39 mnemonic generation, HD key derivation for EVM and
//! Cosmos chains, bech32 address prefix conversion, RPC endpoint probing,
//! and passphrase-based encryption of secrets. Everything runs locally;
//! only the RPC probes touch the network.

pub mod error;
pub mod crypto;
pub mod account;
pub mod address;
pub mod rpc;
pub mod prefs;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
