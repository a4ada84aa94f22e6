//! Ethereum address parsing and EIP-55 checksum normalization.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sha3::{Digest, Keccak256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must be 0x followed by exactly 40 hex digits")]
    BadLength,
    #[error("address contains non-hex characters")]
    BadDigit,
}

/// A checksummed Ethereum address.
///
/// Parsing accepts any casing of the 40-digit hex body and stores the EIP-55
/// checksummed rendering, so formatting an already-checksummed address is a
/// no-op. Deserialization funnels through the same parser, so persisted JSON
/// cannot smuggle a malformed string into the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build from raw bytes, e.g. well-known placeholder slots.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        let mut body = String::with_capacity(40);
        for byte in bytes {
            body.push_str(&format!("{byte:02x}"));
        }
        Address(checksum(&body))
    }
}

/// EIP-55: hash the lowercase hex body with Keccak-256 and uppercase each
/// alphabetic digit whose corresponding hash nibble is >= 8.
fn checksum(lower_body: &str) -> String {
    let digest = Keccak256::digest(lower_body.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, ch) in lower_body.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;
        if body.len() != 40 {
            return Err(AddressError::BadLength);
        }
        if !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::BadDigit);
        }
        Ok(Address(checksum(&body.to_ascii_lowercase())))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, AddressError};

    #[test]
    fn checksums_known_vectors() {
        let cases = [
            (
                "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
                "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            ),
            (
                "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Address>().unwrap().as_str(), expected);
        }
    }

    #[test]
    fn checksumming_is_idempotent() {
        let once: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
            .parse()
            .unwrap();
        let twice: Address = once.as_str().parse().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn accepts_uppercase_hex_input() {
        let address: Address = "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"
            .parse()
            .unwrap();
        assert_eq!(address.as_str(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse::<Address>(),
            Err(AddressError::MissingPrefix)
        );
        assert_eq!("0x1234".parse::<Address>(), Err(AddressError::BadLength));
        assert_eq!(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaeg".parse::<Address>(),
            Err(AddressError::BadDigit)
        );
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let address: Address = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"
            .parse()
            .unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn deserializing_validates_and_checksums() {
        let address: Address =
            serde_json::from_str("\"0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed\"").unwrap();
        assert_eq!(address.as_str(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

        assert!(serde_json::from_str::<Address>("\"0x1234\"").is_err());
        assert!(serde_json::from_str::<Address>("\"not an address\"").is_err());
    }
}
