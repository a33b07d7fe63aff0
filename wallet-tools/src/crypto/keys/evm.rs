//! EVM key derivation and address encoding

use secp256k1::{Secp256k1, SecretKey, PublicKey as Secp256k1PublicKey};

use crate::error::{Error, Result};
use super::derivation::{self, KeyPair, PrivateKey, PublicKey, KeyType};

/// Derive an EVM key pair from a seed and derivation path
pub fn derive_evm_key_pair(seed: &[u8], path: &str) -> Result<KeyPair> {
    let secret_key = derivation::derive_secret_key(seed, path)?;
    key_pair_from_secret(&secret_key)
}

/// Build an EVM key pair from raw 32-byte private key material
pub fn key_pair_from_bytes(bytes: &[u8]) -> Result<KeyPair> {
    let secret_key = SecretKey::from_slice(bytes)
        .map_err(|e| Error::InvalidInput(format!("invalid private key: {}", e)))?;
    key_pair_from_secret(&secret_key)
}

fn key_pair_from_secret(secret_key: &SecretKey) -> Result<KeyPair> {
    let secp = Secp256k1::new();
    let public_key = Secp256k1PublicKey::from_secret_key(&secp, secret_key);

    let private_key = PrivateKey::new(secret_key.secret_bytes().to_vec(), KeyType::Evm);
    // EVM addresses hash the uncompressed point
    let public_key = PublicKey::new(public_key.serialize_uncompressed().to_vec(), KeyType::Evm);

    KeyPair::new(private_key, public_key)
}

/// Get the EVM address from a public key, in EIP-55 checksum casing
pub fn public_key_to_address(public_key: &PublicKey) -> Result<String> {
    if public_key.key_type() != KeyType::Evm {
        return Err(Error::KeyDerivation("Not an EVM public key".to_string()));
    }

    let public_key = public_key.as_bytes();

    // The public key should be in uncompressed format (65 bytes)
    if public_key.len() != 65 {
        return Err(Error::KeyDerivation("Invalid EVM public key length".to_string()));
    }

    // Skip the 0x04 marker byte, hash the point, keep the last 20 bytes
    let key_hash = keccak256(&public_key[1..]);
    let address = hex::encode(&key_hash[12..]);

    Ok(to_checksum_address(&address))
}

/// Apply EIP-55 mixed-case checksum to a lowercase hex address (no prefix)
fn to_checksum_address(address: &str) -> String {
    let digest = keccak256(address.as_bytes());
    let digest_hex = hex::encode(digest);

    let checksummed: String = address
        .chars()
        .zip(digest_hex.chars())
        .map(|(c, d)| {
            if c.is_ascii_alphabetic() && d.to_digit(16).unwrap_or(0) >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();

    format!("0x{}", checksummed)
}

/// Calculate the Keccak-256 hash of data
fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
