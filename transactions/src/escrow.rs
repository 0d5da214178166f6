//! Escrow transactions: lock XRP until a time or condition, then release or
//! return it.

use xledger_types::{AccountAddress, Amount, RippleTime};

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Lock XRP in escrow.
    EscrowCreate, [Amount, Destination, DestinationTag, CancelAfter, FinishAfter, Condition]
}

transaction_variant! {
    /// Deliver escrowed XRP to its destination.
    EscrowFinish, [Owner, OfferSequence, Condition, Fulfillment]
}

transaction_variant! {
    /// Return escrowed XRP to its owner after expiry.
    EscrowCancel, [Owner, OfferSequence]
}

impl EscrowCreate {
    pub fn amount(&self) -> Option<Amount> {
        self.record().amount(Field::Amount)
    }

    pub fn destination(&self) -> Option<AccountAddress> {
        self.record().account(Field::Destination)
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.record().uint32(Field::DestinationTag)
    }

    pub fn cancel_after(&self) -> Option<RippleTime> {
        self.record().uint32(Field::CancelAfter).map(RippleTime::new)
    }

    pub fn finish_after(&self) -> Option<RippleTime> {
        self.record().uint32(Field::FinishAfter).map(RippleTime::new)
    }

    /// Hex-encoded crypto-condition.
    pub fn condition(&self) -> Option<&str> {
        self.record().string(Field::Condition)
    }
}

impl EscrowFinish {
    pub fn owner(&self) -> Option<AccountAddress> {
        self.record().account(Field::Owner)
    }

    /// Sequence of the `EscrowCreate` that made the escrow.
    pub fn offer_sequence(&self) -> Option<u32> {
        self.record().uint32(Field::OfferSequence)
    }

    pub fn condition(&self) -> Option<&str> {
        self.record().string(Field::Condition)
    }

    pub fn fulfillment(&self) -> Option<&str> {
        self.record().string(Field::Fulfillment)
    }
}

impl EscrowCancel {
    pub fn owner(&self) -> Option<AccountAddress> {
        self.record().account(Field::Owner)
    }

    pub fn offer_sequence(&self) -> Option<u32> {
        self.record().uint32(Field::OfferSequence)
    }
}
