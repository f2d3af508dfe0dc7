//! A 20-byte account address as used by EVM wallets.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must have 40 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("address contains a non-hex character")]
    InvalidHex,
}

/// An account address. Displays as lower-case `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address, used as "no account".
    pub const ZERO: Address = Address([0; 20]);

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `0x1234…abcd` form for narrow layouts.
    pub fn abbreviated(&self) -> String {
        let full = self.to_string();
        format!("{}…{}", &full[..6], &full[full.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .ok_or(ParseAddressError::MissingPrefix)?;

        if hex.len() != 40 {
            return Err(ParseAddressError::InvalidLength(hex.len()));
        }
        // from_str_radix would also take a sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseAddressError::InvalidHex);
        }

        let mut bytes = [0u8; 20];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = hex
                .get(i * 2..i * 2 + 2)
                .ok_or(ParseAddressError::InvalidHex)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseAddressError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0xB6e790Df0aB9Abb7E261e467Be6b65aF0d88E133";

    #[test]
    fn parses_mixed_case_and_displays_lower_case() {
        let address: Address = RECIPIENT.parse().unwrap();
        assert_eq!(address.to_string(), RECIPIENT.to_lowercase());
        assert!(!address.is_zero());
        assert_eq!(address.abbreviated(), "0xb6e7…e133");
    }

    #[test]
    fn zero_address() {
        let zero: Address = "0x0000000000000000000000000000000000000000".parse().unwrap();
        assert_eq!(zero, Address::ZERO);
        assert!(zero.is_zero());
        assert_eq!(Address::default(), Address::ZERO);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "b6e790df0ab9abb7e261e467be6b65af0d88e133".parse::<Address>(),
            Err(ParseAddressError::MissingPrefix)
        );
        assert_eq!("0x1234".parse::<Address>(), Err(ParseAddressError::InvalidLength(4)));
        assert_eq!(
            "0xzz6e790df0ab9abb7e261e467be6b65af0d88e13".parse::<Address>(),
            Err(ParseAddressError::InvalidHex)
        );
        assert_eq!(
            "0x+b6e790df0ab9abb7e261e467be6b65af0d88e13".parse::<Address>(),
            Err(ParseAddressError::InvalidHex)
        );
        assert_eq!(
            "0xb6e790df0ab9abb7e261e467be6b65af0d88e1+3".parse::<Address>(),
            Err(ParseAddressError::InvalidHex)
        );
    }

    #[test]
    fn serde_uses_hex_strings() {
        let address: Address = RECIPIENT.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", RECIPIENT.to_lowercase()));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
