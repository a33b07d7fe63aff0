//! Common key derivation functionality
//!
//! Both supported chain families sign with secp256k1, so the BIP32 routine
//! (HMAC-SHA512 master key, tweak-add child keys) lives here and the chain
//! modules only differ in how they serialize public keys and addresses.

use hmac::{Hmac, Mac};
use secp256k1::{Secp256k1, SecretKey, PublicKey as Secp256k1PublicKey};
use sha2::Sha512;

use crate::error::{Error, Result};

/// Hardened child indices start at 2^31
const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Supported key types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KeyType {
    /// Ethereum and EVM compatible chains
    Evm,
    /// Cosmos SDK chains
    Cosmos,
}

/// A private key for a specific chain family
#[derive(Clone)]
pub struct PrivateKey {
    /// The raw private key bytes
    bytes: Vec<u8>,
    /// The type of key
    key_type: KeyType,
}

impl PrivateKey {
    /// Create a new private key from bytes
    pub fn new(bytes: Vec<u8>, key_type: KeyType) -> Self {
        Self { bytes, key_type }
    }

    /// Get the raw private key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Hex encoding with a `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.bytes))
    }
}

impl std::fmt::Debug for PrivateKey {
    // Key material stays out of logs and panic messages
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bytes", &"[redacted]")
            .field("key_type", &self.key_type)
            .finish()
    }
}

/// A public key for a specific chain family
#[derive(Debug, Clone)]
pub struct PublicKey {
    /// The raw public key bytes
    bytes: Vec<u8>,
    /// The type of key
    key_type: KeyType,
}

impl PublicKey {
    /// Create a new public key from bytes
    pub fn new(bytes: Vec<u8>, key_type: KeyType) -> Self {
        Self { bytes, key_type }
    }

    /// Get the raw public key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }
}

/// A key pair for a specific chain family
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The private key
    private_key: PrivateKey,
    /// The public key
    public_key: PublicKey,
}

impl KeyPair {
    /// Create a new key pair
    pub fn new(private_key: PrivateKey, public_key: PublicKey) -> Result<Self> {
        if private_key.key_type() != public_key.key_type() {
            return Err(Error::KeyDerivation("Key type mismatch".to_string()));
        }
        Ok(Self { private_key, public_key })
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.private_key.key_type()
    }
}

/// Derive a key pair from a seed for a specific chain family
pub fn derive_key_pair(seed: &[u8], key_type: KeyType, path: &str) -> Result<KeyPair> {
    match key_type {
        KeyType::Evm => crate::crypto::keys::evm::derive_evm_key_pair(seed, path),
        KeyType::Cosmos => crate::crypto::keys::cosmos::derive_cosmos_key_pair(seed, path),
    }
}

/// Parse a BIP-32 derivation path
///
/// The path must match `m(/<index>'?)*` where every index is a decimal
/// number below 2^31; a trailing `'` marks the segment as hardened.
pub fn parse_derivation_path(path: &str) -> Result<Vec<u32>> {
    let rest = match path.strip_prefix('m') {
        Some("") => return Ok(Vec::new()),
        Some(rest) => rest
            .strip_prefix('/')
            .ok_or_else(|| Error::InvalidPath(path.to_string()))?,
        None => return Err(Error::InvalidPath(path.to_string())),
    };

    let mut result = Vec::new();
    for component in rest.split('/') {
        let (digits, hardened) = match component.strip_suffix('\'') {
            Some(digits) => (digits, true),
            None => (component, false),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPath(format!(
                "invalid path component '{}' in '{}'",
                component, path
            )));
        }

        let index = digits.parse::<u32>().map_err(|_| {
            Error::InvalidPath(format!("invalid path component '{}' in '{}'", component, path))
        })?;
        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidPath(format!(
                "index {} out of range in '{}'",
                index, path
            )));
        }

        result.push(if hardened { HARDENED_OFFSET + index } else { index });
    }

    Ok(result)
}

/// Derive a secp256k1 secret key from a seed at the given path
pub(crate) fn derive_secret_key(seed: &[u8], path: &str) -> Result<SecretKey> {
    let components = parse_derivation_path(path)?;

    let (mut secret_key, mut chain_code) = derive_master_key(seed)?;
    for component in components {
        (secret_key, chain_code) = derive_child_key(secret_key, chain_code, component)?;
    }

    SecretKey::from_slice(&secret_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid secret key: {}", e)))
}

/// Derive the master key from a seed
fn derive_master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut hmac = Hmac::<Sha512>::new_from_slice(b"Bitcoin seed")
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(seed);
    let result = hmac.finalize().into_bytes();

    let mut secret_key = [0u8; 32];
    let mut chain_code = [0u8; 32];

    secret_key.copy_from_slice(&result[0..32]);
    chain_code.copy_from_slice(&result[32..64]);

    Ok((secret_key, chain_code))
}

/// Derive a child key from a parent key
fn derive_child_key(parent_key: [u8; 32], parent_chain_code: [u8; 32], index: u32) -> Result<([u8; 32], [u8; 32])> {
    let secp = Secp256k1::new();
    let parent_secret_key = SecretKey::from_slice(&parent_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid parent key: {}", e)))?;

    let mut data = Vec::with_capacity(37);

    if index >= HARDENED_OFFSET {
        // Hardened derivation commits to the parent private key
        data.push(0);
        data.extend_from_slice(&parent_key);
    } else {
        let parent_public_key = Secp256k1PublicKey::from_secret_key(&secp, &parent_secret_key);
        data.extend_from_slice(&parent_public_key.serialize());
    }

    data.extend_from_slice(&index.to_be_bytes());

    let mut hmac = Hmac::<Sha512>::new_from_slice(&parent_chain_code)
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(&data);
    let result = hmac.finalize().into_bytes();

    let mut child_key = [0u8; 32];
    let mut child_chain_code = [0u8; 32];

    child_key.copy_from_slice(&result[0..32]);
    child_chain_code.copy_from_slice(&result[32..64]);

    // Add the parent key to the child key (mod n)
    let child_secret_key = SecretKey::from_slice(&child_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid child key: {}", e)))?;

    let child_secret_key = child_secret_key.add_tweak(&parent_secret_key.into())
        .map_err(|e| Error::KeyDerivation(format!("Key addition error: {}", e)))?;

    Ok((child_secret_key.secret_bytes(), child_chain_code))
}
