//! Dual-chain wallet account builder

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::crypto::keys::{cosmos, evm};
use crate::crypto::mnemonic::mnemonic_to_seed;
use crate::error::{Error, Result};

/// Default derivation path for the EVM account
pub const DEFAULT_EVM_PATH: &str = "m/44'/60'/0'/0/0";
/// Default derivation path for the Cosmos account
pub const DEFAULT_COSMOS_PATH: &str = "m/44'/118'/0'/0/0";

/// A generated pair of accounts, one per chain family
///
/// When built from a raw private key both accounts share the same key
/// material; when built from a mnemonic each chain uses its own path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    /// EIP-55 checksummed EVM address
    pub evm_address: String,
    /// EVM private key, 0x-prefixed hex
    pub evm_private_key: String,
    /// Bech32 Cosmos address under `cosmos_prefix`
    pub cosmos_address: String,
    /// Cosmos private key, 0x-prefixed hex
    pub cosmos_private_key: String,
    /// The bech32 prefix the Cosmos address was encoded with
    pub cosmos_prefix: String,
}

impl WalletAccount {
    /// Build both accounts from a mnemonic at the default paths
    pub fn from_mnemonic(phrase: &str, prefix: &str) -> Result<Self> {
        Self::from_mnemonic_at(phrase, DEFAULT_EVM_PATH, DEFAULT_COSMOS_PATH, prefix)
    }

    /// Build both accounts from a mnemonic at caller-supplied paths
    pub fn from_mnemonic_at(
        phrase: &str,
        evm_path: &str,
        cosmos_path: &str,
        prefix: &str,
    ) -> Result<Self> {
        if prefix.is_empty() {
            return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
        }

        let seed = mnemonic_to_seed(phrase.trim(), None)?;
        debug!(evm_path, cosmos_path, prefix, "deriving accounts from mnemonic");

        let evm_pair = evm::derive_evm_key_pair(&seed, evm_path)?;
        let cosmos_pair = cosmos::derive_cosmos_key_pair(&seed, cosmos_path)?;

        Ok(Self {
            evm_address: evm::public_key_to_address(evm_pair.public_key())?,
            evm_private_key: evm_pair.private_key().to_hex(),
            cosmos_address: cosmos::public_key_to_address(cosmos_pair.public_key(), prefix)?,
            cosmos_private_key: cosmos_pair.private_key().to_hex(),
            cosmos_prefix: prefix.to_string(),
        })
    }

    /// Build both accounts from a raw private key shared by the two chains
    ///
    /// Accepts 64 hex characters with an optional `0x` prefix.
    pub fn from_private_key(private_key: &str, prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
        }

        let bytes = parse_private_key(private_key)?;
        debug!(prefix, "deriving accounts from raw private key");

        let evm_pair = evm::key_pair_from_bytes(&bytes)?;
        let cosmos_pair = cosmos::key_pair_from_bytes(&bytes)?;

        Ok(Self {
            evm_address: evm::public_key_to_address(evm_pair.public_key())?,
            evm_private_key: evm_pair.private_key().to_hex(),
            cosmos_address: cosmos::public_key_to_address(cosmos_pair.public_key(), prefix)?,
            cosmos_private_key: cosmos_pair.private_key().to_hex(),
            cosmos_prefix: prefix.to_string(),
        })
    }
}

/// Parse a 32-byte private key from hex input, with or without `0x`
fn parse_private_key(input: &str) -> Result<[u8; 32]> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    if digits.len() != 64 {
        return Err(Error::InvalidInput(
            "private key must be 64 hex characters (with or without 0x prefix)".to_string(),
        ));
    }

    let decoded = hex::decode(digits)
        .map_err(|e| Error::InvalidInput(format!("invalid private key hex: {}", e)))?;

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&decoded);
    Ok(bytes)
}
