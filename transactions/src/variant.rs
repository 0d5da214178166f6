//! The trait shared by every typed transaction variant.

use crate::base::BaseTransaction;
use crate::field::Field;
use crate::kind::TransactionType;
use crate::record::TxRecord;

/// A typed transaction kind built on [`BaseTransaction`].
///
/// Implementors only declare their tag and their own fields; construction,
/// tag defaulting and field-list merging all happen in the provided `new`.
pub trait TransactionVariant: Sized {
    /// The canonical tag written into drafts.
    const KIND: TransactionType;

    /// Fields this variant adds to the base list.
    const FIELDS: &'static [Field];

    fn from_base(base: BaseTransaction) -> Self;

    fn base(&self) -> &BaseTransaction;

    fn base_mut(&mut self) -> &mut BaseTransaction;

    fn into_base(self) -> BaseTransaction;

    /// Wrap a record, or start a draft when `tx` is `None`.
    fn new(tx: Option<TxRecord>) -> Self {
        Self::from_base(BaseTransaction::new(tx, Self::KIND, Self::FIELDS))
    }

    fn transaction_type(&self) -> &str {
        self.base().transaction_type()
    }

    fn fields(&self) -> &[Field] {
        self.base().fields()
    }

    fn record(&self) -> &TxRecord {
        self.base().record()
    }
}

/// Declare a variant struct and its [`TransactionVariant`] impl.
macro_rules! transaction_variant {
    ($(#[$meta:meta])* $name:ident, [$($field:ident),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            base: $crate::base::BaseTransaction,
        }

        impl $crate::variant::TransactionVariant for $name {
            const KIND: $crate::kind::TransactionType = $crate::kind::TransactionType::$name;
            const FIELDS: &'static [$crate::field::Field] = &[$($crate::field::Field::$field),*];

            fn from_base(base: $crate::base::BaseTransaction) -> Self {
                Self { base }
            }

            fn base(&self) -> &$crate::base::BaseTransaction {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::base::BaseTransaction {
                &mut self.base
            }

            fn into_base(self) -> $crate::base::BaseTransaction {
                self.base
            }
        }
    };
}

pub(crate) use transaction_variant;
