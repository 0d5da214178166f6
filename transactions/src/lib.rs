//! Typed ledger transactions built over raw JSON records.
//!
//! A raw record ([`TxRecord`]) is wrapped by a [`BaseTransaction`], which
//! fills in the `TransactionType` tag when it is missing and fixes the list of
//! fields the variant recognises. Each variant adds one read-only accessor per
//! field; accessors never fail and report missing or malformed data as `None`.
//!
//! Transaction kinds:
//! - **Payment**: send XRP or issued currency
//! - **OfferCreate / OfferCancel**: place or withdraw an order-book offer
//! - **TrustSet**: open or adjust a trust line
//! - **AccountSet / AccountDelete / SetRegularKey / SignerListSet**: account management
//! - **EscrowCreate / EscrowFinish / EscrowCancel**: time- or condition-locked XRP
//! - **CheckCreate / CheckCash / CheckCancel**: deferred payments
//! - **DepositPreauth**: deposit authorization allow-list
//! - **TicketCreate**: reserve sequence numbers

pub mod account;
pub mod base;
pub mod check;
pub mod deposit_preauth;
pub mod error;
pub mod escrow;
pub mod field;
pub mod kind;
pub mod memo;
pub mod offer;
pub mod payment;
pub mod record;
pub mod ticket;
pub mod trust_set;
pub mod variant;

pub use base::BaseTransaction;
pub use error::TransactionError;
pub use field::{Field, FieldKind, BASE_FIELDS};
pub use kind::TransactionType;
pub use memo::Memo;
pub use record::TxRecord;
pub use variant::TransactionVariant;

use account::{AccountDelete, AccountSet, SetRegularKey, SignerListSet};
use check::{CheckCancel, CheckCash, CheckCreate};
use deposit_preauth::DepositPreauth;
use escrow::{EscrowCancel, EscrowCreate, EscrowFinish};
use offer::{OfferCancel, OfferCreate};
use payment::Payment;
use ticket::TicketCreate;
use trust_set::TrustSet;

/// Any transaction, typed by its `TransactionType` tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Transaction {
    Payment(Payment),
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    TrustSet(TrustSet),
    AccountSet(AccountSet),
    AccountDelete(AccountDelete),
    SetRegularKey(SetRegularKey),
    SignerListSet(SignerListSet),
    EscrowCreate(EscrowCreate),
    EscrowFinish(EscrowFinish),
    EscrowCancel(EscrowCancel),
    CheckCreate(CheckCreate),
    CheckCash(CheckCash),
    CheckCancel(CheckCancel),
    DepositPreauth(DepositPreauth),
    TicketCreate(TicketCreate),
    /// A tag outside the catalogue; only the base fields are recognised.
    Unknown(BaseTransaction),
}

impl Transaction {
    /// Type a record by its `TransactionType` tag.
    ///
    /// Fails only when the tag is missing or not a string. Unknown tags are
    /// kept as [`Transaction::Unknown`].
    pub fn from_record(record: TxRecord) -> Result<Self, TransactionError> {
        let tag = record
            .string(Field::TransactionType)
            .ok_or(TransactionError::MissingTransactionType)?;
        let Some(kind) = TransactionType::from_tag(tag) else {
            tracing::debug!(tx_type = tag, "unrecognised transaction type");
            return Ok(Self::Unknown(BaseTransaction::unrecognised(record)));
        };
        let tx = Some(record);
        Ok(match kind {
            TransactionType::Payment => Self::Payment(Payment::new(tx)),
            TransactionType::OfferCreate => Self::OfferCreate(OfferCreate::new(tx)),
            TransactionType::OfferCancel => Self::OfferCancel(OfferCancel::new(tx)),
            TransactionType::TrustSet => Self::TrustSet(TrustSet::new(tx)),
            TransactionType::AccountSet => Self::AccountSet(AccountSet::new(tx)),
            TransactionType::AccountDelete => Self::AccountDelete(AccountDelete::new(tx)),
            TransactionType::SetRegularKey => Self::SetRegularKey(SetRegularKey::new(tx)),
            TransactionType::SignerListSet => Self::SignerListSet(SignerListSet::new(tx)),
            TransactionType::EscrowCreate => Self::EscrowCreate(EscrowCreate::new(tx)),
            TransactionType::EscrowFinish => Self::EscrowFinish(EscrowFinish::new(tx)),
            TransactionType::EscrowCancel => Self::EscrowCancel(EscrowCancel::new(tx)),
            TransactionType::CheckCreate => Self::CheckCreate(CheckCreate::new(tx)),
            TransactionType::CheckCash => Self::CheckCash(CheckCash::new(tx)),
            TransactionType::CheckCancel => Self::CheckCancel(CheckCancel::new(tx)),
            TransactionType::DepositPreauth => Self::DepositPreauth(DepositPreauth::new(tx)),
            TransactionType::TicketCreate => Self::TicketCreate(TicketCreate::new(tx)),
        })
    }

    /// Parse JSON text and type it.
    pub fn from_json_str(s: &str) -> Result<Self, TransactionError> {
        Self::from_record(TxRecord::from_json_str(s)?)
    }

    /// Get the underlying base transaction.
    pub fn base(&self) -> &BaseTransaction {
        match self {
            Self::Payment(tx) => tx.base(),
            Self::OfferCreate(tx) => tx.base(),
            Self::OfferCancel(tx) => tx.base(),
            Self::TrustSet(tx) => tx.base(),
            Self::AccountSet(tx) => tx.base(),
            Self::AccountDelete(tx) => tx.base(),
            Self::SetRegularKey(tx) => tx.base(),
            Self::SignerListSet(tx) => tx.base(),
            Self::EscrowCreate(tx) => tx.base(),
            Self::EscrowFinish(tx) => tx.base(),
            Self::EscrowCancel(tx) => tx.base(),
            Self::CheckCreate(tx) => tx.base(),
            Self::CheckCash(tx) => tx.base(),
            Self::CheckCancel(tx) => tx.base(),
            Self::DepositPreauth(tx) => tx.base(),
            Self::TicketCreate(tx) => tx.base(),
            Self::Unknown(base) => base,
        }
    }

    /// Take back the underlying base transaction.
    pub fn into_base(self) -> BaseTransaction {
        match self {
            Self::Payment(tx) => tx.into_base(),
            Self::OfferCreate(tx) => tx.into_base(),
            Self::OfferCancel(tx) => tx.into_base(),
            Self::TrustSet(tx) => tx.into_base(),
            Self::AccountSet(tx) => tx.into_base(),
            Self::AccountDelete(tx) => tx.into_base(),
            Self::SetRegularKey(tx) => tx.into_base(),
            Self::SignerListSet(tx) => tx.into_base(),
            Self::EscrowCreate(tx) => tx.into_base(),
            Self::EscrowFinish(tx) => tx.into_base(),
            Self::EscrowCancel(tx) => tx.into_base(),
            Self::CheckCreate(tx) => tx.into_base(),
            Self::CheckCash(tx) => tx.into_base(),
            Self::CheckCancel(tx) => tx.into_base(),
            Self::DepositPreauth(tx) => tx.into_base(),
            Self::TicketCreate(tx) => tx.into_base(),
            Self::Unknown(base) => base,
        }
    }

    /// Name of the Rust variant, `"Unknown"` for unrecognised tags.
    pub fn variant_name(&self) -> &'static str {
        self.kind().map_or("Unknown", |kind| kind.as_str())
    }

    /// The variant's kind, `None` for [`Transaction::Unknown`].
    ///
    /// This follows the enum case, not the stored tag, which may differ when
    /// a variant was built over a record already carrying another tag; see
    /// [`BaseTransaction::stored_kind`] for the latter.
    pub fn kind(&self) -> Option<TransactionType> {
        Some(match self {
            Self::Payment(_) => Payment::KIND,
            Self::OfferCreate(_) => OfferCreate::KIND,
            Self::OfferCancel(_) => OfferCancel::KIND,
            Self::TrustSet(_) => TrustSet::KIND,
            Self::AccountSet(_) => AccountSet::KIND,
            Self::AccountDelete(_) => AccountDelete::KIND,
            Self::SetRegularKey(_) => SetRegularKey::KIND,
            Self::SignerListSet(_) => SignerListSet::KIND,
            Self::EscrowCreate(_) => EscrowCreate::KIND,
            Self::EscrowFinish(_) => EscrowFinish::KIND,
            Self::EscrowCancel(_) => EscrowCancel::KIND,
            Self::CheckCreate(_) => CheckCreate::KIND,
            Self::CheckCash(_) => CheckCash::KIND,
            Self::CheckCancel(_) => CheckCancel::KIND,
            Self::DepositPreauth(_) => DepositPreauth::KIND,
            Self::TicketCreate(_) => TicketCreate::KIND,
            Self::Unknown(_) => return None,
        })
    }

    pub fn transaction_type(&self) -> &str {
        self.base().transaction_type()
    }

    pub fn fields(&self) -> &[Field] {
        self.base().fields()
    }

    pub fn record(&self) -> &TxRecord {
        self.base().record()
    }

    pub fn into_record(self) -> TxRecord {
        self.into_base().into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_tag() {
        for kind in TransactionType::ALL {
            let record = TxRecord::new().with(Field::TransactionType, kind.as_str());
            let tx = Transaction::from_record(record).unwrap();
            assert_eq!(tx.kind(), Some(*kind));
            assert_eq!(tx.variant_name(), kind.as_str());
            assert_eq!(tx.transaction_type(), kind.as_str());
        }
    }

    #[test]
    fn missing_tag_is_an_error() {
        let err = Transaction::from_record(TxRecord::new()).unwrap_err();
        assert!(matches!(err, TransactionError::MissingTransactionType));

        let record = TxRecord::from_value(json!({ "TransactionType": 3 })).unwrap();
        assert!(Transaction::from_record(record).is_err());
    }

    #[test]
    fn unknown_tag_is_kept() {
        let tx = Transaction::from_json_str(r#"{"TransactionType":"NFTokenMint","Fee":"10"}"#)
            .unwrap();
        assert!(matches!(tx, Transaction::Unknown(_)));
        assert_eq!(tx.kind(), None);
        assert_eq!(tx.variant_name(), "Unknown");
        assert_eq!(tx.transaction_type(), "NFTokenMint");
        assert_eq!(tx.fields(), BASE_FIELDS);
        assert_eq!(tx.base().fee(), Some(10));
    }

    #[test]
    fn kind_follows_case_not_stored_tag() {
        let cancel = OfferCancel::new(Some(
            TxRecord::new().with(Field::TransactionType, "Payment"),
        ));
        let tx = Transaction::OfferCancel(cancel);
        assert_eq!(tx.kind(), Some(TransactionType::OfferCancel));
        assert_eq!(tx.variant_name(), "OfferCancel");
        assert_eq!(tx.base().stored_kind(), Some(TransactionType::Payment));
        assert_eq!(tx.transaction_type(), "Payment");
    }

    #[test]
    fn into_record_returns_original_data() {
        let raw = json!({ "TransactionType": "OfferCancel", "OfferSequence": 42 });
        let tx = Transaction::from_record(TxRecord::from_value(raw.clone()).unwrap()).unwrap();
        assert_eq!(tx.into_record().into_value(), raw);
    }
}
