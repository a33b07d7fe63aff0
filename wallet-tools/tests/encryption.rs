//! Tests for the secret encryption helper

use wallet_tools::crypto::cipher;
use wallet_tools::Error;

#[test]
fn test_private_key_round_trip() {
    let secret = "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";
    let passphrase = "correct horse battery staple";

    let encrypted = cipher::encrypt_secret(secret, passphrase).unwrap();
    assert_ne!(encrypted, secret);

    let decrypted = cipher::decrypt_secret(&encrypted, passphrase).unwrap();
    assert_eq!(decrypted, secret);
}

#[test]
fn test_mnemonic_round_trip_with_generated_key() {
    let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    let key = cipher::generate_encryption_key();

    let encrypted = cipher::encrypt_secret(mnemonic, &key).unwrap();
    assert_eq!(cipher::decrypt_secret(&encrypted, &key).unwrap(), mnemonic);
}

#[test]
fn test_wrong_passphrase_reports_decryption_failed() {
    let encrypted = cipher::encrypt_secret("secret", "right").unwrap();

    assert!(matches!(
        cipher::decrypt_secret(&encrypted, "wrong"),
        Err(Error::DecryptionFailed)
    ));
}

#[test]
fn test_corrupted_ciphertext_reports_decryption_failed() {
    let encrypted = cipher::encrypt_secret("secret", "passphrase").unwrap();
    let truncated = &encrypted[..encrypted.len() / 2];

    assert!(matches!(
        cipher::decrypt_secret(truncated, "passphrase"),
        Err(Error::DecryptionFailed)
    ));
}

#[test]
fn test_ciphertexts_are_unique_per_call() {
    let a = cipher::encrypt_secret("same secret", "same passphrase").unwrap();
    let b = cipher::encrypt_secret("same secret", "same passphrase").unwrap();

    assert_ne!(a, b);
    assert_eq!(
        cipher::decrypt_secret(&a, "same passphrase").unwrap(),
        cipher::decrypt_secret(&b, "same passphrase").unwrap()
    );
}
