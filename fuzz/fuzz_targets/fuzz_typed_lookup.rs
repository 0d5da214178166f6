#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

use xledger_transactions::{Field, TxRecord};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl From<FuzzValue> for Value {
    fn from(v: FuzzValue) -> Self {
        match v {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::from(b),
            FuzzValue::Int(i) => Value::from(i),
            FuzzValue::UInt(u) => Value::from(u),
            FuzzValue::Float(f) => Value::from(f),
            FuzzValue::Text(s) => Value::from(s),
        }
    }
}

fuzz_target!(|input: Vec<(u8, FuzzValue)>| {
    // Every typed getter must tolerate any scalar under any key.
    let mut record = TxRecord::new();
    for (index, value) in input {
        let field = Field::ALL[usize::from(index) % Field::ALL.len()];
        record.insert(field, value);
    }
    for field in Field::ALL {
        let _ = record.uint8(*field);
        let _ = record.uint32(*field);
        let _ = record.amount(*field);
        let _ = record.account(*field);
        let _ = record.hash256(*field);
        let _ = record.array(*field);
    }
});
