//! Rendering typed transactions for the terminal or as JSON.

use serde_json::{json, Map, Value};
use xledger_transactions::account::SignerEntry;
use xledger_transactions::{Field, FieldKind, Memo, Transaction};
use xledger_types::format_drops;

/// Shown for fields that resolve to nothing.
pub const UNDEFINED: &str = "undefined";

/// The typed value of a recognised field as JSON, `null` when the field is
/// absent, malformed or not recognised by the variant.
pub fn typed_json(tx: &Transaction, field: Field) -> Value {
    if !tx.base().recognises(field) {
        return Value::Null;
    }
    let record = tx.record();
    let value = match field.kind() {
        FieldKind::UInt8 => record.uint8(field).map(Value::from),
        FieldKind::UInt32 => record.uint32(field).map(Value::from),
        FieldKind::Drops => record.drops(field).map(|d| Value::String(d.to_string())),
        FieldKind::Amount => record.amount(field).map(|a| a.to_json()),
        FieldKind::Account => record.account(field).map(|a| Value::String(a.to_string())),
        FieldKind::Hash256 => record.hash256(field).map(|h| Value::String(h.to_string())),
        FieldKind::Hash128 | FieldKind::Blob | FieldKind::TransactionType => {
            record.string(field).map(Value::from)
        }
        FieldKind::Memos => tx
            .base()
            .memos()
            .filter(|memos| !memos.is_empty())
            .map(|memos| Value::Array(memos.iter().map(Memo::to_json).collect())),
        FieldKind::SignerEntries => record.array(field).map(|values| {
            Value::Array(
                values
                    .iter()
                    .filter(|v| SignerEntry::from_json(v).is_some())
                    .cloned()
                    .collect(),
            )
        }),
    };
    value.unwrap_or(Value::Null)
}

/// Human-readable typed value of a field, or [`UNDEFINED`].
pub fn typed_text(tx: &Transaction, field: Field) -> String {
    let record = tx.record();
    let text = match field.kind() {
        _ if !tx.base().recognises(field) => None,
        FieldKind::Drops => record.drops(field).map(|d| format!("{} XRP", format_drops(d))),
        FieldKind::Amount => record.amount(field).map(|a| a.to_string()),
        FieldKind::Memos => tx.base().memos().filter(|m| !m.is_empty()).map(|memos| {
            memos
                .iter()
                .map(|m| {
                    m.decoded_data()
                        .or_else(|| m.memo_data.clone())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(" | ")
        }),
        FieldKind::SignerEntries => record.array(field).map(|values| {
            values
                .iter()
                .filter_map(SignerEntry::from_json)
                .map(|e| format!("{}:{}", e.account, e.signer_weight))
                .collect::<Vec<_>>()
                .join(", ")
        }),
        _ => match typed_json(tx, field) {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        },
    };
    text.unwrap_or_else(|| UNDEFINED.to_string())
}

/// Text block for one transaction: a header line, then one line per
/// recognised field.
pub fn render_text(tx: &Transaction) -> String {
    let width = tx.fields().iter().map(|f| f.name().len()).max().unwrap_or(0);
    let mut out = format!("{} ({})\n", tx.transaction_type(), tx.variant_name());
    for field in tx.fields() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            field.name(),
            typed_text(tx, *field),
            width = width
        ));
    }
    out
}

/// JSON view: `{ "TransactionType", "variant", "fields": { name: value|null } }`.
pub fn render_json(tx: &Transaction) -> Value {
    let fields: Map<String, Value> = tx
        .fields()
        .iter()
        .map(|f| (f.name().to_string(), typed_json(tx, *f)))
        .collect();
    json!({
        "TransactionType": tx.transaction_type(),
        "variant": tx.variant_name(),
        "fields": fields,
    })
}

/// The record a signer would see.
pub fn render_signing(tx: &Transaction) -> Value {
    tx.base().signing_record().into_value()
}
