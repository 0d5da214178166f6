//! Transaction memos.
//!
//! On the ledger each memo is wrapped as `{"Memo": {"MemoType", "MemoData",
//! "MemoFormat"}}` and every part is hex-encoded.

use serde_json::{json, Map, Value};

/// One memo attached to a transaction. All parts are hex strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memo {
    pub memo_type: Option<String>,
    pub memo_data: Option<String>,
    pub memo_format: Option<String>,
}

impl Memo {
    /// A plain-text memo; both parts are hex-encoded here.
    pub fn text(memo_type: &str, data: &str) -> Self {
        Self {
            memo_type: Some(hex::encode_upper(memo_type)),
            memo_data: Some(hex::encode_upper(data)),
            memo_format: Some(hex::encode_upper("text/plain")),
        }
    }

    /// Read one `{"Memo": {...}}` wrapper. `None` if the wrapper is missing
    /// or carries no part at all.
    pub fn from_json(value: &Value) -> Option<Self> {
        let inner = value.get("Memo")?.as_object()?;
        let part = |key: &str| inner.get(key).and_then(Value::as_str).map(str::to_string);
        let memo = Self {
            memo_type: part("MemoType"),
            memo_data: part("MemoData"),
            memo_format: part("MemoFormat"),
        };
        if memo == Self::default() {
            return None;
        }
        Some(memo)
    }

    pub fn to_json(&self) -> Value {
        let mut inner = Map::new();
        if let Some(t) = &self.memo_type {
            inner.insert("MemoType".into(), Value::String(t.clone()));
        }
        if let Some(d) = &self.memo_data {
            inner.insert("MemoData".into(), Value::String(d.clone()));
        }
        if let Some(f) = &self.memo_format {
            inner.insert("MemoFormat".into(), Value::String(f.clone()));
        }
        json!({ "Memo": inner })
    }

    /// `MemoData` decoded as UTF-8, if it is valid hex and valid UTF-8.
    pub fn decoded_data(&self) -> Option<String> {
        decode_hex_utf8(self.memo_data.as_deref()?)
    }

    pub fn decoded_type(&self) -> Option<String> {
        decode_hex_utf8(self.memo_type.as_deref()?)
    }
}

fn decode_hex_utf8(raw: &str) -> Option<String> {
    let bytes = hex::decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}

/// Parse a `Memos` array, skipping malformed entries.
pub(crate) fn memos_from_json(values: &[Value]) -> Vec<Memo> {
    values.iter().filter_map(Memo::from_json).collect()
}

pub(crate) fn memos_to_json(memos: &[Memo]) -> Value {
    Value::Array(memos.iter().map(Memo::to_json).collect())
}
