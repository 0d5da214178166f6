//! Ledger amounts: native drops or issued-currency values.
//!
//! Native amounts travel as a decimal string of drops (`"1000000"`), issued
//! amounts as an object `{ "currency", "issuer", "value" }`. Issued values are
//! kept as the decimal string the ledger sent; this crate does no arithmetic
//! on them.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

use crate::{AccountAddress, TypesError};

/// Drops per whole native unit.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Upper bound on any native amount (100 billion XRP).
pub const MAX_DROPS: u64 = 100_000_000_000 * DROPS_PER_XRP;

/// An amount of an issued (non-native) currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IssuedAmount {
    pub currency: String,
    pub issuer: AccountAddress,
    pub value: String,
}

/// A transaction amount.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    /// Native amount in drops.
    Drops(u64),
    /// Issued currency amount.
    Issued(IssuedAmount),
}

impl Amount {
    /// Parse a native drops string.
    pub fn parse_drops(raw: &str) -> Result<Self, TypesError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypesError::InvalidAmount(raw.to_string()));
        }
        let drops: u64 = raw
            .parse()
            .map_err(|_| TypesError::InvalidAmount(raw.to_string()))?;
        if drops > MAX_DROPS {
            return Err(TypesError::InvalidAmount(raw.to_string()));
        }
        Ok(Self::Drops(drops))
    }

    /// Read an amount out of its JSON form. Anything malformed yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) => Self::parse_drops(raw).ok(),
            Value::Object(map) => {
                let currency = map.get("currency")?.as_str()?;
                let issuer = map.get("issuer")?.as_str()?;
                let amount = match map.get("value")? {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                Some(Self::Issued(IssuedAmount {
                    currency: currency.to_string(),
                    issuer: AccountAddress::new_unchecked(issuer),
                    value: amount,
                }))
            }
            _ => None,
        }
    }

    /// The JSON form the ledger expects.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Drops(drops) => Value::String(drops.to_string()),
            Self::Issued(issued) => json!({
                "currency": issued.currency,
                "issuer": issued.issuer.as_str(),
                "value": issued.value,
            }),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Drops(_))
    }

    /// Drops, if this is a native amount.
    pub fn drops(&self) -> Option<u64> {
        match self {
            Self::Drops(drops) => Some(*drops),
            Self::Issued(_) => None,
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drops(drops) => write!(f, "{} XRP", format_drops(*drops)),
            Self::Issued(issued) => {
                write!(f, "{} {}.{}", issued.value, issued.currency, issued.issuer)
            }
        }
    }
}

/// Render drops as a decimal XRP string with trailing zeros trimmed.
pub fn format_drops(drops: u64) -> String {
    let whole = drops / DROPS_PER_XRP;
    let frac = drops % DROPS_PER_XRP;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:06}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
