//! Validated contract/account address type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A validated blockchain account or contract address.
///
/// The textual form is exactly 42 characters: a `0x` prefix followed by
/// 40 hexadecimal digits. The original casing is preserved, so mixed-case
/// (checksummed) addresses round-trip through [`fmt::Display`] unchanged.
/// Equality is value-based on the exact input string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Construct an address from its raw textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddressFormat`] if the input is not exactly
    /// 42 characters, lacks the `0x` prefix, or contains non-hex digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        if raw.len() != 42 {
            return Err(Error::InvalidAddressFormat(raw));
        }
        let Some(digits) = raw.strip_prefix("0x") else {
            return Err(Error::InvalidAddressFormat(raw));
        };
        if hex::decode(digits).is_err() {
            return Err(Error::InvalidAddressFormat(raw));
        }
        Ok(Self(raw))
    }

    /// The exact textual form this address was constructed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Address {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_round_trips_exactly() {
        let raw = "0xbAA81A0179015bE47Ad439566374F2Bae098686F";
        let address = Address::new(raw).unwrap();
        assert_eq!(address.to_string(), raw);
        assert_eq!(address.as_str(), raw);
    }

    #[test]
    fn equality_is_value_based() {
        let a = Address::new("0x0000000000000000000000000000000000000001").unwrap();
        let b = Address::new("0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_length_is_rejected() {
        for raw in ["", "0x", "0x1234", "0xbAA81A0179015bE47Ad439566374F2Bae098686F00"] {
            let err = Address::new(raw).unwrap_err();
            assert!(matches!(err, Error::InvalidAddressFormat(_)), "{raw}");
        }
    }

    #[test]
    fn missing_prefix_is_rejected() {
        // 42 characters, but no 0x prefix.
        let raw = "00baA81A0179015bE47Ad439566374F2Bae098686F";
        assert!(matches!(
            Address::new(raw),
            Err(Error::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn non_hex_digits_are_rejected() {
        let raw = "0xZZA81A0179015bE47Ad439566374F2Bae098686F";
        assert!(matches!(
            Address::new(raw),
            Err(Error::InvalidAddressFormat(_))
        ));
    }
}
