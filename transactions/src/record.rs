//! The raw, untyped transaction record and its non-failing typed lookups.
//!
//! Every getter returns `Option`: a missing key, an explicit `null`, a value of
//! the wrong JSON type or an out-of-range number all come back as `None`.
//! Integers written in float form (`42.0`) are the same number and read as
//! such. Nothing here substitutes defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use xledger_types::{AccountAddress, Amount, Hash256};

use crate::error::TransactionError;
use crate::field::Field;

/// A transaction as exchanged with a ledger node: field name -> JSON value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxRecord(Map<String, Value>);

impl TxRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, TransactionError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(TransactionError::NotAnObject),
        }
    }

    /// Parse JSON text holding a single object.
    pub fn from_json_str(s: &str) -> Result<Self, TransactionError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    /// Builder-style insert.
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.name().to_string(), value.into())
    }

    pub fn remove(&mut self, field: Field) -> Option<Value> {
        self.0.remove(field.name())
    }

    /// Whether the field holds a non-null value.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The field's value; `null` counts as absent.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.get_key(field.name())
    }

    /// Lookup by raw key, for keys outside the field catalogue.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Keep only the keys for which `keep` returns true.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|k, _| keep(k));
    }

    // ── Typed lookups ──────────────────────────────────────────────────

    pub fn uint8(&self, field: Field) -> Option<u8> {
        whole_number(self.get(field)?).and_then(|v| u8::try_from(v).ok())
    }

    pub fn uint32(&self, field: Field) -> Option<u32> {
        whole_number(self.get(field)?).and_then(|v| u32::try_from(v).ok())
    }

    pub fn string(&self, field: Field) -> Option<&str> {
        self.get(field)?.as_str()
    }

    pub fn account(&self, field: Field) -> Option<AccountAddress> {
        self.string(field).map(AccountAddress::new_unchecked)
    }

    pub fn amount(&self, field: Field) -> Option<Amount> {
        Amount::from_json(self.get(field)?)
    }

    /// A native-only amount, in drops.
    pub fn drops(&self, field: Field) -> Option<u64> {
        self.amount(field)?.drops()
    }

    pub fn hash256(&self, field: Field) -> Option<Hash256> {
        Hash256::parse(self.string(field)?).ok()
    }

    pub fn array(&self, field: Field) -> Option<&Vec<Value>> {
        self.get(field)?.as_array()
    }
}

/// A non-negative integer, whether written as `42` or `42.0`.
fn whole_number(value: &Value) -> Option<u64> {
    if let Some(v) = value.as_u64() {
        return Some(v);
    }
    let f = value.as_f64()?;
    // 2^64 as f64; anything at or above it does not fit.
    if f.fract() != 0.0 || f < 0.0 || f >= 18_446_744_073_709_551_616.0 {
        return None;
    }
    Some(f as u64)
}

impl TryFrom<Value> for TxRecord {
    type Error = TransactionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for TxRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_json() {
        assert!(matches!(
            TxRecord::from_json_str("[1, 2]"),
            Err(TransactionError::NotAnObject)
        ));
        assert!(matches!(
            TxRecord::from_json_str("{not json"),
            Err(TransactionError::Json(_))
        ));
    }

    #[test]
    fn null_counts_as_absent() {
        let record = TxRecord::from_value(json!({ "OfferSequence": null })).unwrap();
        assert!(!record.contains(Field::OfferSequence));
        assert_eq!(record.uint32(Field::OfferSequence), None);
    }

    #[test]
    fn uint32_rejects_wrong_types_and_ranges() {
        let record = TxRecord::new()
            .with(Field::Sequence, "7")
            .with(Field::Flags, -1)
            .with(Field::SourceTag, u64::from(u32::MAX) + 1)
            .with(Field::DestinationTag, 1.5);
        assert_eq!(record.uint32(Field::Sequence), None);
        assert_eq!(record.uint32(Field::Flags), None);
        assert_eq!(record.uint32(Field::SourceTag), None);
        assert_eq!(record.uint32(Field::DestinationTag), None);
    }

    #[test]
    fn integral_floats_are_numbers() {
        let record = TxRecord::new()
            .with(Field::Sequence, 42.0)
            .with(Field::TickSize, 5.0)
            .with(Field::Flags, -0.0)
            .with(Field::SourceTag, 4_294_967_296.0)
            .with(Field::DestinationTag, -3.0);
        assert_eq!(record.uint32(Field::Sequence), Some(42));
        assert_eq!(record.uint8(Field::TickSize), Some(5));
        assert_eq!(record.uint32(Field::Flags), Some(0));
        assert_eq!(record.uint32(Field::SourceTag), None);
        assert_eq!(record.uint32(Field::DestinationTag), None);
    }

    #[test]
    fn uint8_range() {
        let record = TxRecord::new().with(Field::TickSize, 300);
        assert_eq!(record.uint8(Field::TickSize), None);
        let record = TxRecord::new().with(Field::TickSize, 5);
        assert_eq!(record.uint8(Field::TickSize), Some(5));
    }

    #[test]
    fn typed_scalars() {
        let record = TxRecord::from_value(json!({
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Fee": "12",
            "CheckID": "49647F0D748DC3FE26BDACBC57F251AADEFFF391403EC9BF87C97F67E9977FB0",
        }))
        .unwrap();
        assert_eq!(
            record.account(Field::Account).unwrap().as_str(),
            "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
        );
        assert_eq!(record.drops(Field::Fee), Some(12));
        assert!(record.hash256(Field::CheckID).is_some());
        assert_eq!(record.hash256(Field::InvoiceID), None);
    }

    #[test]
    fn keeps_unknown_keys() {
        let record = TxRecord::from_value(json!({ "NetworkID": 21337 })).unwrap();
        assert_eq!(record.get_key("NetworkID"), Some(&json!(21337)));
        assert_eq!(record.len(), 1);
    }
}
