//! Order-book transactions: place and cancel offers.

use xledger_types::{Amount, RippleTime};

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Place an offer on the decentralized exchange.
    OfferCreate, [TakerGets, TakerPays, Expiration, OfferSequence]
}

transaction_variant! {
    /// Remove an offer from the order book.
    ///
    /// Identifies the offer by the sequence number of the `OfferCreate` that
    /// placed it.
    OfferCancel, [OfferSequence]
}

/// `tfPassive`: do not consume offers that exactly match this one.
pub const TF_PASSIVE: u32 = 0x0001_0000;
/// `tfImmediateOrCancel`
pub const TF_IMMEDIATE_OR_CANCEL: u32 = 0x0002_0000;
/// `tfFillOrKill`
pub const TF_FILL_OR_KILL: u32 = 0x0004_0000;
/// `tfSell`: exchange the entire `TakerGets` even for more than `TakerPays`.
pub const TF_SELL: u32 = 0x0008_0000;

impl OfferCreate {
    pub fn taker_gets(&self) -> Option<Amount> {
        self.record().amount(Field::TakerGets)
    }

    pub fn taker_pays(&self) -> Option<Amount> {
        self.record().amount(Field::TakerPays)
    }

    pub fn expiration(&self) -> Option<RippleTime> {
        self.record().uint32(Field::Expiration).map(RippleTime::new)
    }

    /// An earlier offer to replace, if any.
    pub fn offer_sequence(&self) -> Option<u32> {
        self.record().uint32(Field::OfferSequence)
    }

    pub fn is_passive(&self) -> bool {
        self.base().has_flag(TF_PASSIVE)
    }

    pub fn is_sell(&self) -> bool {
        self.base().has_flag(TF_SELL)
    }
}

impl OfferCancel {
    /// Sequence of the offer to cancel; `None` when the record lacks it.
    pub fn offer_sequence(&self) -> Option<u32> {
        self.record().uint32(Field::OfferSequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::BASE_FIELDS;
    use crate::record::TxRecord;
    use serde_json::json;

    #[test]
    fn offer_cancel_fields_append_offer_sequence() {
        let tx = OfferCancel::new(None);
        let fields = tx.fields();
        assert_eq!(fields.len(), BASE_FIELDS.len() + 1);
        assert_eq!(&fields[..BASE_FIELDS.len()], BASE_FIELDS);
        assert_eq!(fields.last(), Some(&Field::OfferSequence));
    }

    #[test]
    fn offer_create_reads_both_sides() {
        let tx = TxRecord::from_value(json!({
            "TransactionType": "OfferCreate",
            "TakerGets": "6000000",
            "TakerPays": {
                "currency": "GKO",
                "issuer": "ruazs5h1qEsqpke88pcqnaseXdm6od2xc",
                "value": "2",
            },
            "Expiration": 595640108,
            "Flags": TF_SELL,
        }))
        .unwrap();
        let offer = OfferCreate::new(Some(tx));
        assert_eq!(offer.taker_gets(), Some(Amount::Drops(6_000_000)));
        assert!(matches!(offer.taker_pays(), Some(Amount::Issued(_))));
        assert_eq!(offer.expiration(), Some(RippleTime::new(595640108)));
        assert_eq!(offer.offer_sequence(), None);
        assert!(offer.is_sell());
        assert!(!offer.is_passive());
    }
}
