//! Secret encryption using AES-256-GCM with Argon2id key derivation
//!
//! Ciphertexts are self-contained strings: base64 of salt || nonce ||
//! ciphertext, so the user can store a single value and decrypt it later
//! with only the passphrase.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use argon2::Argon2;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// Salt for Argon2id key derivation (bytes)
const SALT_LEN: usize = 16;
/// Nonce for AES-GCM (bytes)
const NONCE_LEN: usize = 12;

/// Encrypt a secret (private key or mnemonic) with a user passphrase
pub fn encrypt_secret(plaintext: &str, passphrase: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let key_bytes = derive_key(passphrase, &salt)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| Error::Encryption(format!("encryption failed: {}", e)))?;

    let mut packed = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    packed.extend_from_slice(&salt);
    packed.extend_from_slice(&nonce_bytes);
    packed.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(packed))
}

/// Decrypt a secret previously produced by [`encrypt_secret`]
///
/// A wrong passphrase, a truncated or tampered ciphertext, and non-UTF-8
/// plaintext all surface as [`Error::DecryptionFailed`]; no partial
/// plaintext is ever returned.
pub fn decrypt_secret(encoded: &str, passphrase: &str) -> Result<String> {
    let packed = BASE64
        .decode(encoded.trim())
        .map_err(|_| Error::DecryptionFailed)?;

    if packed.len() <= SALT_LEN + NONCE_LEN {
        return Err(Error::DecryptionFailed);
    }

    let (salt, rest) = packed.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let key_bytes = derive_key(passphrase, salt)?;

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes));
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| Error::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| Error::DecryptionFailed)
}

/// Generate a random 32-byte encryption key, hex-encoded
pub fn generate_encryption_key() -> String {
    let mut key = [0u8; 32];
    OsRng.fill_bytes(&mut key);
    hex::encode(key)
}

/// Derive a 256-bit cipher key from the passphrase with Argon2id
fn derive_key(passphrase: &str, salt: &[u8]) -> Result<[u8; 32]> {
    let mut key = [0u8; 32];
    Argon2::default()
        .hash_password_into(passphrase.as_bytes(), salt, &mut key)
        .map_err(|e| Error::Encryption(format!("key derivation failed: {}", e)))?;
    Ok(key)
}
