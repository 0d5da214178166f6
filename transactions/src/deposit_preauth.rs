//! DepositPreauth: allow or revoke an account's permission to deposit.

use xledger_types::AccountAddress;

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Preauthorize (or revoke) a sender when Deposit Authorization is on.
    /// Exactly one of `Authorize` or `Unauthorize` is set on a valid record.
    DepositPreauth, [Authorize, Unauthorize]
}

impl DepositPreauth {
    pub fn authorize(&self) -> Option<AccountAddress> {
        self.record().account(Field::Authorize)
    }

    pub fn unauthorize(&self) -> Option<AccountAddress> {
        self.record().account(Field::Unauthorize)
    }
}
