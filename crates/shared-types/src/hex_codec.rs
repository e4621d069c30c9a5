//! # Hex Codec
//!
//! `0x`-prefixed hex parsing and formatting used by the CLI and the
//! attestation JSON envelope.

use crate::entities::{Address, Hash};
use crate::errors::HexError;

/// Decode a hex string, with or without `0x` prefix.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| HexError::InvalidHex(e.to_string()))
}

/// Decode a 32-byte hash.
pub fn parse_hash(input: &str) -> Result<Hash, HexError> {
    parse_fixed::<32>(input)
}

/// Decode a 20-byte address.
pub fn parse_address(input: &str) -> Result<Address, HexError> {
    parse_fixed::<20>(input)
}

pub(crate) fn parse_fixed<const N: usize>(input: &str) -> Result<[u8; N], HexError> {
    let bytes = parse_hex_bytes(input)?;
    bytes.as_slice().try_into().map_err(|_| HexError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// Encode bytes as a lowercase `0x`-prefixed hex string.
pub fn to_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Serde adapter serialising fixed-size byte arrays as `0x` hex strings.
///
/// Use with `#[serde(with = "shared_types::serde_hex_array")]`.
pub mod serde_hex_array {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        value: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex_prefixed(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_fixed::<N>(&s).map_err(D::Error::custom)
    }
}

/// Serde adapter serialising byte vectors as `0x` hex strings.
pub mod serde_hex_bytes {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex_prefixed(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_bytes(&s).map_err(D::Error::custom)
    }
}
