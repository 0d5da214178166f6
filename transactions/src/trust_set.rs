//! TrustSet: create or modify a trust line.

use xledger_types::Amount;

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Create or modify a trust line to an issuer.
    TrustSet, [LimitAmount, QualityIn, QualityOut]
}

/// `tfSetNoRipple`
pub const TF_SET_NO_RIPPLE: u32 = 0x0002_0000;
/// `tfClearNoRipple`
pub const TF_CLEAR_NO_RIPPLE: u32 = 0x0004_0000;

impl TrustSet {
    /// The line's limit; issuer and currency identify the line.
    pub fn limit_amount(&self) -> Option<Amount> {
        self.record().amount(Field::LimitAmount)
    }

    pub fn quality_in(&self) -> Option<u32> {
        self.record().uint32(Field::QualityIn)
    }

    pub fn quality_out(&self) -> Option<u32> {
        self.record().uint32(Field::QualityOut)
    }
}
