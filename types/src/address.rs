//! Classic account address type (`r...`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// The base58 alphabet used by the ledger's address encoding.
const LEDGER_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// A classic ledger account address, always starting with `r`.
///
/// Values read out of a transaction record are wrapped as-is with
/// [`AccountAddress::new_unchecked`]; use [`AccountAddress::is_valid`] to ask
/// whether they are well formed, or [`AccountAddress::parse`] to reject
/// malformed input up front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The leading character of every classic address.
    pub const PREFIX: char = 'r';

    pub const MIN_LEN: usize = 25;
    pub const MAX_LEN: usize = 35;

    /// Parse and validate an address string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let address = Self(raw.into());
        if address.is_valid() {
            Ok(address)
        } else {
            Err(TypesError::InvalidAddress(address.0))
        }
    }

    /// Wrap a string without validating it.
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix, length and alphabet check. Does not verify the checksum.
    pub fn is_valid(&self) -> bool {
        let len = self.0.len();
        self.0.starts_with(Self::PREFIX)
            && (Self::MIN_LEN..=Self::MAX_LEN).contains(&len)
            && self.0.chars().all(|c| LEDGER_ALPHABET.contains(c))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn parses_well_formed_address() {
        let address = AccountAddress::parse(GENESIS).unwrap();
        assert_eq!(address.as_str(), GENESIS);
        assert_eq!(address.to_string(), GENESIS);
    }

    #[test]
    fn rejects_wrong_prefix() {
        let err = AccountAddress::parse("xHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").unwrap_err();
        assert!(matches!(err, TypesError::InvalidAddress(_)));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        // '0', 'O', 'I' and 'l' are not part of the alphabet.
        assert!(AccountAddress::parse("rHb9CJAWyB4rj91VRWn96DkukG4bwdty0h").is_err());
        assert!(AccountAddress::parse("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyOh").is_err());
    }

    #[test]
    fn rejects_bad_length() {
        assert!(AccountAddress::parse("rHb9CJ").is_err());
        assert!(AccountAddress::parse(format!("{GENESIS}{GENESIS}")).is_err());
    }

    #[test]
    fn unchecked_keeps_malformed_input() {
        let address = AccountAddress::new_unchecked("not-an-address");
        assert_eq!(address.as_str(), "not-an-address");
        assert!(!address.is_valid());
    }

    #[test]
    fn serializes_as_plain_string() {
        let address = AccountAddress::new_unchecked(GENESIS);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{GENESIS}\""));
    }
}
