//! Checks: deferred payments the destination cashes later.

use xledger_types::{AccountAddress, Amount, Hash256, RippleTime};

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Create a check the destination may cash.
    CheckCreate, [Destination, SendMax, DestinationTag, Expiration, InvoiceID]
}

transaction_variant! {
    /// Cash a check for an exact `Amount` or at least `DeliverMin`.
    CheckCash, [CheckID, Amount, DeliverMin]
}

transaction_variant! {
    /// Cancel an uncashed check.
    CheckCancel, [CheckID]
}

impl CheckCreate {
    pub fn destination(&self) -> Option<AccountAddress> {
        self.record().account(Field::Destination)
    }

    pub fn send_max(&self) -> Option<Amount> {
        self.record().amount(Field::SendMax)
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.record().uint32(Field::DestinationTag)
    }

    pub fn expiration(&self) -> Option<RippleTime> {
        self.record().uint32(Field::Expiration).map(RippleTime::new)
    }

    pub fn invoice_id(&self) -> Option<Hash256> {
        self.record().hash256(Field::InvoiceID)
    }
}

impl CheckCash {
    pub fn check_id(&self) -> Option<Hash256> {
        self.record().hash256(Field::CheckID)
    }

    pub fn amount(&self) -> Option<Amount> {
        self.record().amount(Field::Amount)
    }

    pub fn deliver_min(&self) -> Option<Amount> {
        self.record().amount(Field::DeliverMin)
    }
}

impl CheckCancel {
    pub fn check_id(&self) -> Option<Hash256> {
        self.record().hash256(Field::CheckID)
    }
}
