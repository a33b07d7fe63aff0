//! Cosmos key derivation and bech32 address encoding

use bech32::{ToBase32, Variant};
use ripemd::Ripemd160;
use secp256k1::{Secp256k1, SecretKey, PublicKey as Secp256k1PublicKey};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use super::derivation::{self, KeyPair, PrivateKey, PublicKey, KeyType};

/// Derive a Cosmos key pair from a seed and derivation path
pub fn derive_cosmos_key_pair(seed: &[u8], path: &str) -> Result<KeyPair> {
    let secret_key = derivation::derive_secret_key(seed, path)?;
    key_pair_from_secret(&secret_key)
}

/// Build a Cosmos key pair from raw 32-byte private key material
pub fn key_pair_from_bytes(bytes: &[u8]) -> Result<KeyPair> {
    let secret_key = SecretKey::from_slice(bytes)
        .map_err(|e| Error::InvalidInput(format!("invalid private key: {}", e)))?;
    key_pair_from_secret(&secret_key)
}

fn key_pair_from_secret(secret_key: &SecretKey) -> Result<KeyPair> {
    let secp = Secp256k1::new();
    let public_key = Secp256k1PublicKey::from_secret_key(&secp, secret_key);

    let private_key = PrivateKey::new(secret_key.secret_bytes().to_vec(), KeyType::Cosmos);
    // Cosmos addresses hash the compressed point
    let public_key = PublicKey::new(public_key.serialize().to_vec(), KeyType::Cosmos);

    KeyPair::new(private_key, public_key)
}

/// Get the bech32 address for a public key under the given prefix
///
/// The payload is RIPEMD160(SHA256(compressed public key)), the standard
/// Cosmos account address construction.
pub fn public_key_to_address(public_key: &PublicKey, prefix: &str) -> Result<String> {
    if public_key.key_type() != KeyType::Cosmos {
        return Err(Error::KeyDerivation("Not a Cosmos public key".to_string()));
    }
    if prefix.is_empty() {
        return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
    }

    let public_key = public_key.as_bytes();

    // The public key should be in compressed format (33 bytes)
    if public_key.len() != 33 {
        return Err(Error::KeyDerivation("Invalid Cosmos public key length".to_string()));
    }

    let sha = Sha256::digest(public_key);
    let hash160 = Ripemd160::digest(sha);

    bech32::encode(prefix, hash160.to_base32(), Variant::Bech32)
        .map_err(|e| Error::InvalidPrefix(format!("{}: {}", prefix, e)))
}
