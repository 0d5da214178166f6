//! Transaction type tags.

use std::fmt;

macro_rules! kinds {
    ($($variant:ident),+ $(,)?) => {
        /// The transaction kinds this crate models.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TransactionType {
            $($variant,)+
        }

        impl TransactionType {
            pub const ALL: &'static [TransactionType] = &[$(TransactionType::$variant,)+];

            /// The canonical `TransactionType` tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(TransactionType::$variant => stringify!($variant),)+
                }
            }

            /// Match a tag exactly; tags are case-sensitive on the ledger.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $(stringify!($variant) => Some(TransactionType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

kinds! {
    Payment,
    OfferCreate,
    OfferCancel,
    TrustSet,
    AccountSet,
    AccountDelete,
    SetRegularKey,
    SignerListSet,
    EscrowCreate,
    EscrowFinish,
    EscrowCancel,
    CheckCreate,
    CheckCash,
    CheckCancel,
    DepositPreauth,
    TicketCreate,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
