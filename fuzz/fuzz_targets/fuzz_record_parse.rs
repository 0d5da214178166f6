#![no_main]

use libfuzzer_sys::fuzz_target;

use xledger_transactions::{Field, Transaction, TxRecord};

fuzz_target!(|data: &[u8]| {
    // Typing arbitrary records and reading every field must never panic.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = TxRecord::from_json_str(text) else {
        return;
    };
    let Ok(tx) = Transaction::from_record(record) else {
        return;
    };

    let base = tx.base();
    for field in Field::ALL {
        let _ = base.field_value(*field);
    }
    let _ = base.memos();
    let _ = base.hash();
    let _ = base.fee();
    let _ = base.signing_record();
});
