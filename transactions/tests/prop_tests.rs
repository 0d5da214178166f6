use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

use xledger_transactions::offer::OfferCancel;
use xledger_transactions::{
    BaseTransaction, Field, Transaction, TransactionType, TransactionVariant, TxRecord,
    BASE_FIELDS,
};

fn any_kind() -> impl Strategy<Value = TransactionType> {
    prop::sample::select(TransactionType::ALL.to_vec())
}

proptest! {
    /// An empty record always takes the variant's canonical tag.
    #[test]
    fn empty_record_gets_canonical_tag(kind in any_kind()) {
        let base = BaseTransaction::new(Some(TxRecord::new()), kind, &[]);
        prop_assert_eq!(base.transaction_type(), kind.as_str());
    }

    /// A tag already present is never overwritten.
    #[test]
    fn preset_tag_is_preserved(tag in "[A-Za-z]{1,24}") {
        let tx = OfferCancel::new(Some(TxRecord::new().with(Field::TransactionType, tag.clone())));
        prop_assert_eq!(tx.transaction_type(), tag.as_str());
    }

    /// Numeric OfferSequence values come back exactly.
    #[test]
    fn offer_sequence_roundtrip(seq in any::<u32>()) {
        let tx = OfferCancel::new(Some(TxRecord::new().with(Field::OfferSequence, seq)));
        prop_assert_eq!(tx.offer_sequence(), Some(seq));
    }

    /// Values that are not a u32 read as absent, never as zero.
    #[test]
    fn non_u32_offer_sequence_is_absent(
        text in "[0-9]{1,9}",
        negative in i64::MIN..0i64,
        wide in (u64::from(u32::MAX) + 1)..u64::MAX,
    ) {
        for value in [json!(text), json!(negative), json!(wide), json!(null)] {
            let tx = OfferCancel::new(Some(TxRecord::new().with(Field::OfferSequence, value)));
            prop_assert_eq!(tx.offer_sequence(), None);
        }
    }

    /// Every variant's fields start with the base list and hold no duplicates.
    #[test]
    fn variant_fields_extend_base(kind in any_kind()) {
        let record = TxRecord::new().with(Field::TransactionType, kind.as_str());
        let tx = Transaction::from_record(record).unwrap();
        let fields = tx.fields();
        prop_assert_eq!(&fields[..BASE_FIELDS.len()], BASE_FIELDS);
        let unique: HashSet<_> = fields.iter().collect();
        prop_assert_eq!(unique.len(), fields.len());
    }

    /// The signing record only ever holds recognised, unsigned fields.
    #[test]
    fn signing_record_is_an_allow_list(
        kind in any_kind(),
        keys in prop::collection::vec(prop::sample::select(Field::ALL.to_vec()), 0..12),
        junk in "[a-z]{1,8}",
    ) {
        let mut record = TxRecord::new().with(Field::TransactionType, kind.as_str());
        for key in keys.iter().filter(|k| **k != Field::TransactionType) {
            record.insert(*key, 1);
        }
        let mut raw = record.into_value();
        raw[format!("x_{junk}")] = json!(true);
        let tx = Transaction::from_record(TxRecord::from_value(raw).unwrap()).unwrap();

        let signing = tx.base().signing_record();
        for key in signing.keys() {
            let field = Field::from_name(key);
            prop_assert!(field.is_some(), "unknown key {} kept", key);
            let field = field.unwrap();
            prop_assert!(tx.fields().contains(&field));
            prop_assert!(field != Field::TxnSignature && field != Field::Hash);
        }
    }
}
