//! Bech32 address prefix conversion
//!
//! Re-encodes the data part of an existing bech32 address under a different
//! human-readable prefix. The payload passes through untouched, so the
//! operation is lossless and converting back reproduces the original.

use bech32::{FromBase32, Variant};

use crate::error::{Error, Result};

/// Convert a bech32 address to a different prefix
pub fn convert_prefix(address: &str, new_prefix: &str) -> Result<String> {
    if new_prefix.is_empty() {
        return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
    }

    let (_, words, variant) = bech32::decode(address.trim())
        .map_err(|e| Error::InvalidBech32(e.to_string()))?;

    bech32::encode(new_prefix, words, variant)
        .map_err(|e| Error::InvalidPrefix(format!("{}: {}", new_prefix, e)))
}

/// Decode a bech32 address into its prefix and raw payload bytes
pub fn decode(address: &str) -> Result<(String, Vec<u8>)> {
    let (prefix, words, _) = bech32::decode(address.trim())
        .map_err(|e| Error::InvalidBech32(e.to_string()))?;

    let payload = Vec::<u8>::from_base32(&words)
        .map_err(|e| Error::InvalidBech32(e.to_string()))?;

    Ok((prefix, payload))
}

/// Encode raw payload bytes as a bech32 address under the given prefix
pub fn encode(prefix: &str, payload: &[u8]) -> Result<String> {
    use bech32::ToBase32;

    if prefix.is_empty() {
        return Err(Error::InvalidPrefix("prefix must not be empty".to_string()));
    }

    bech32::encode(prefix, payload.to_base32(), Variant::Bech32)
        .map_err(|e| Error::InvalidPrefix(format!("{}: {}", prefix, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COSMOS_ADDR: &str = "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4";
    const OSMO_ADDR: &str = "osmo19rl4cm2hmr8afy4kldpxz3fka4jguq0a5m7df8";

    #[test]
    fn test_convert_known_answer() {
        assert_eq!(convert_prefix(COSMOS_ADDR, "osmo").unwrap(), OSMO_ADDR);
    }

    #[test]
    fn test_convert_round_trip() {
        let converted = convert_prefix(COSMOS_ADDR, "osmo").unwrap();
        let back = convert_prefix(&converted, "cosmos").unwrap();
        assert_eq!(back, COSMOS_ADDR);
    }

    #[test]
    fn test_payload_survives_conversion() {
        let (_, original) = decode(COSMOS_ADDR).unwrap();
        let (_, converted) = decode(&convert_prefix(COSMOS_ADDR, "osmo").unwrap()).unwrap();
        assert_eq!(original, converted);
        assert_eq!(original.len(), 20);
    }

    #[test]
    fn test_invalid_address_rejected() {
        for bad in ["", "cosmos1", "not-an-address", "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal5"] {
            assert!(
                matches!(convert_prefix(bad, "osmo"), Err(Error::InvalidBech32(_))),
                "expected InvalidBech32 for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(
            convert_prefix(COSMOS_ADDR, ""),
            Err(Error::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let payload = [0x11u8; 20];
        let address = encode("osmo", &payload).unwrap();
        let (prefix, decoded) = decode(&address).unwrap();
        assert_eq!(prefix, "osmo");
        assert_eq!(decoded, payload);
    }
}
