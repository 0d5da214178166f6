//! The closed catalogue of transaction fields the model knows about.

use std::fmt;

/// How a field's value is encoded in a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// 8-bit unsigned integer (JSON number).
    UInt8,
    /// 32-bit unsigned integer (JSON number).
    UInt32,
    /// Native drops as a decimal string.
    Drops,
    /// Native drops string or issued-currency object.
    Amount,
    /// Classic account address.
    Account,
    /// 128-bit hash, hex.
    Hash128,
    /// 256-bit hash, hex.
    Hash256,
    /// Arbitrary hex blob.
    Blob,
    /// Transaction type name.
    TransactionType,
    /// Array of `{"Memo": {...}}` wrappers.
    Memos,
    /// Array of `{"SignerEntry": {...}}` wrappers.
    SignerEntries,
}

macro_rules! fields {
    ($($variant:ident => ($name:literal, $kind:ident)),+ $(,)?) => {
        /// A named transaction field.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every field, in declaration order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The record key for this field.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }

            pub fn kind(&self) -> FieldKind {
                match self {
                    $(Field::$variant => FieldKind::$kind,)+
                }
            }

            /// Look a field up by its record key.
            pub fn from_name(name: &str) -> Option<Field> {
                match name {
                    $($name => Some(Field::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

fields! {
    // Common to every transaction.
    TransactionType => ("TransactionType", TransactionType),
    Account => ("Account", Account),
    Sequence => ("Sequence", UInt32),
    Fee => ("Fee", Drops),
    Flags => ("Flags", UInt32),
    LastLedgerSequence => ("LastLedgerSequence", UInt32),
    SourceTag => ("SourceTag", UInt32),
    TicketSequence => ("TicketSequence", UInt32),
    Memos => ("Memos", Memos),
    SigningPubKey => ("SigningPubKey", Blob),
    TxnSignature => ("TxnSignature", Blob),
    Hash => ("hash", Hash256),

    // Type-specific.
    Amount => ("Amount", Amount),
    Authorize => ("Authorize", Account),
    CancelAfter => ("CancelAfter", UInt32),
    CheckID => ("CheckID", Hash256),
    ClearFlag => ("ClearFlag", UInt32),
    Condition => ("Condition", Blob),
    DeliverMin => ("DeliverMin", Amount),
    Destination => ("Destination", Account),
    DestinationTag => ("DestinationTag", UInt32),
    Domain => ("Domain", Blob),
    EmailHash => ("EmailHash", Hash128),
    Expiration => ("Expiration", UInt32),
    FinishAfter => ("FinishAfter", UInt32),
    Fulfillment => ("Fulfillment", Blob),
    InvoiceID => ("InvoiceID", Hash256),
    LimitAmount => ("LimitAmount", Amount),
    MessageKey => ("MessageKey", Blob),
    OfferSequence => ("OfferSequence", UInt32),
    Owner => ("Owner", Account),
    QualityIn => ("QualityIn", UInt32),
    QualityOut => ("QualityOut", UInt32),
    RegularKey => ("RegularKey", Account),
    SendMax => ("SendMax", Amount),
    SetFlag => ("SetFlag", UInt32),
    SignerEntries => ("SignerEntries", SignerEntries),
    SignerQuorum => ("SignerQuorum", UInt32),
    TakerGets => ("TakerGets", Amount),
    TakerPays => ("TakerPays", Amount),
    TickSize => ("TickSize", UInt8),
    TicketCount => ("TicketCount", UInt32),
    TransferRate => ("TransferRate", UInt32),
    Unauthorize => ("Unauthorize", Account),
}

/// Fields every transaction recognises, in order.
pub const BASE_FIELDS: &[Field] = &[
    Field::TransactionType,
    Field::Account,
    Field::Sequence,
    Field::Fee,
    Field::Flags,
    Field::LastLedgerSequence,
    Field::SourceTag,
    Field::TicketSequence,
    Field::Memos,
    Field::SigningPubKey,
    Field::TxnSignature,
    Field::Hash,
];

/// Fields left out of the record handed to a signer.
pub const SIGNATURE_FIELDS: &[Field] = &[Field::TxnSignature, Field::Hash];

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(*field));
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Field::ALL.iter().map(Field::name).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn hash_uses_lower_case_key() {
        assert_eq!(Field::Hash.name(), "hash");
        assert_eq!(Field::from_name("Hash"), None);
    }

    #[test]
    fn base_fields_start_with_type() {
        assert_eq!(BASE_FIELDS[0], Field::TransactionType);
        assert!(SIGNATURE_FIELDS.iter().all(|f| BASE_FIELDS.contains(f)));
    }
}
