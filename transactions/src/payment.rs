//! Payment: move value from one account to another.

use xledger_types::{AccountAddress, Amount, Hash256};

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// A direct or cross-currency payment.
    Payment, [Destination, DestinationTag, Amount, SendMax, DeliverMin, InvoiceID]
}

/// `tfPartialPayment`: deliver less than `Amount` rather than fail.
pub const TF_PARTIAL_PAYMENT: u32 = 0x0002_0000;

impl Payment {
    pub fn destination(&self) -> Option<AccountAddress> {
        self.record().account(Field::Destination)
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.record().uint32(Field::DestinationTag)
    }

    pub fn amount(&self) -> Option<Amount> {
        self.record().amount(Field::Amount)
    }

    pub fn send_max(&self) -> Option<Amount> {
        self.record().amount(Field::SendMax)
    }

    pub fn deliver_min(&self) -> Option<Amount> {
        self.record().amount(Field::DeliverMin)
    }

    pub fn invoice_id(&self) -> Option<Hash256> {
        self.record().hash256(Field::InvoiceID)
    }

    pub fn is_partial(&self) -> bool {
        self.base().has_flag(TF_PARTIAL_PAYMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TxRecord;
    use serde_json::json;

    #[test]
    fn reads_payment_fields() {
        let tx = TxRecord::from_value(json!({
            "TransactionType": "Payment",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
            "DestinationTag": 13,
            "Amount": "25000000",
            "Fee": "12",
            "Sequence": 2,
        }))
        .unwrap();
        let payment = Payment::new(Some(tx));
        assert_eq!(
            payment.destination().map(|a| a.to_string()).as_deref(),
            Some("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B")
        );
        assert_eq!(payment.destination_tag(), Some(13));
        assert_eq!(payment.amount(), Some(Amount::Drops(25_000_000)));
        assert_eq!(payment.send_max(), None);
        assert_eq!(payment.deliver_min(), None);
        assert_eq!(payment.invoice_id(), None);
        assert!(!payment.is_partial());
        assert_eq!(payment.base().fee(), Some(12));
    }

    #[test]
    fn draft_payment_has_no_amount() {
        let payment = Payment::new(None);
        assert_eq!(payment.transaction_type(), "Payment");
        assert_eq!(payment.amount(), None);
        assert!(payment.base().is_draft());
    }
}
