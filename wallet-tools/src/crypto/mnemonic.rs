//! Mnemonic phrase generation and handling

use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// Supported mnemonic strengths
///
/// BIP39 allows 128-256 bits of entropy in 32-bit steps, giving the five
/// word counts offered by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    Words12,
    /// 15 words (160 bits)
    Words15,
    /// 18 words (192 bits)
    Words18,
    /// 21 words (224 bits)
    Words21,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    /// Get entropy length in bytes
    fn entropy_bytes(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words15 => 20,
            Self::Words18 => 24,
            Self::Words21 => 28,
            Self::Words24 => 32,
        }
    }

    /// Number of words in a phrase of this strength
    pub fn word_count(&self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words15 => 15,
            Self::Words18 => 18,
            Self::Words21 => 21,
            Self::Words24 => 24,
        }
    }
}

/// Generate a new random mnemonic phrase with the specified strength
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<String> {
    let mut entropy = vec![0u8; strength.entropy_bytes()];
    OsRng.fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| Error::InvalidInput(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase against the wordlist and checksum
pub fn validate_mnemonic(phrase: &str) -> Result<()> {
    Mnemonic::parse_normalized(phrase)
        .map_err(|e| Error::InvalidInput(format!("invalid mnemonic: {}", e)))?;
    Ok(())
}

/// Generate a binary seed from a mnemonic phrase and optional passphrase
///
/// The same (phrase, passphrase) pair always yields the same 64-byte seed.
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<Vec<u8>> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| Error::InvalidInput(format!("invalid mnemonic: {}", e)))?;

    let seed = mnemonic.to_seed(passphrase.unwrap_or(""));
    Ok(seed.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_mnemonic_word_counts() {
        for strength in [
            MnemonicStrength::Words12,
            MnemonicStrength::Words15,
            MnemonicStrength::Words18,
            MnemonicStrength::Words21,
            MnemonicStrength::Words24,
        ] {
            let mnemonic = generate_mnemonic(strength).unwrap();
            assert!(validate_mnemonic(&mnemonic).is_ok());

            let words: Vec<&str> = mnemonic.split_whitespace().collect();
            assert_eq!(words.len(), strength.word_count());
        }
    }

    #[test]
    fn test_validate_mnemonic() {
        let invalid = "invalid mnemonic phrase test test test test test test test test test";

        assert!(validate_mnemonic(TEST_MNEMONIC).is_ok());
        assert!(matches!(
            validate_mnemonic(invalid),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_broken_checksum_rejected() {
        // Last word altered: the words are valid but the checksum is not.
        let broken = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(matches!(
            validate_mnemonic(broken),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_mnemonic_to_seed() {
        let seed = mnemonic_to_seed(TEST_MNEMONIC, None).unwrap();

        // BIP39 seeds are 512 bits (64 bytes)
        assert_eq!(seed.len(), 64);
        assert!(hex::encode(&seed).starts_with("5eb00bbd"));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = mnemonic_to_seed(TEST_MNEMONIC, None).unwrap();
        let b = mnemonic_to_seed(TEST_MNEMONIC, None).unwrap();
        assert_eq!(a, b);

        let with_passphrase = mnemonic_to_seed(TEST_MNEMONIC, Some("hunter2")).unwrap();
        assert_ne!(a, with_passphrase);
    }
}
