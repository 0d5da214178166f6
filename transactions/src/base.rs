//! The base transaction every variant is composed from.

use serde_json::Value;
use xledger_types::{AccountAddress, Hash256};

use crate::field::{Field, BASE_FIELDS, SIGNATURE_FIELDS};
use crate::kind::TransactionType;
use crate::memo::{memos_from_json, memos_to_json, Memo};
use crate::record::TxRecord;

/// A wrapped transaction record plus the list of fields its variant
/// recognises.
///
/// Construction writes at most one thing into the record: the
/// `TransactionType` tag, and only when the record does not carry one yet.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseTransaction {
    tx: TxRecord,
    fields: Vec<Field>,
    default_type: Option<TransactionType>,
    draft: bool,
}

impl BaseTransaction {
    /// Wrap `tx` (or an empty draft record) for the variant `kind`, which
    /// recognises `extra` on top of [`BASE_FIELDS`].
    pub fn new(tx: Option<TxRecord>, kind: TransactionType, extra: &[Field]) -> Self {
        let draft = tx.is_none();
        let mut tx = tx.unwrap_or_default();
        if !tx.contains(Field::TransactionType) {
            tracing::trace!(tx_type = kind.as_str(), draft, "defaulting TransactionType");
            tx.insert(Field::TransactionType, kind.as_str());
        }
        Self {
            tx,
            fields: merge_fields(extra),
            default_type: Some(kind),
            draft,
        }
    }

    /// Wrap a record whose tag is outside the known catalogue. Only the base
    /// fields are recognised and nothing is written.
    pub fn unrecognised(tx: TxRecord) -> Self {
        Self {
            tx,
            fields: BASE_FIELDS.to_vec(),
            default_type: None,
            draft: false,
        }
    }

    /// Whether this was constructed without a backing record.
    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn record(&self) -> &TxRecord {
        &self.tx
    }

    pub fn into_record(self) -> TxRecord {
        self.tx
    }

    /// The `TransactionType` tag as stored in the record.
    ///
    /// A record whose tag holds a non-string value reports the variant's
    /// canonical name instead; the stored value is left as it was.
    pub fn transaction_type(&self) -> &str {
        self.tx
            .string(Field::TransactionType)
            .or_else(|| self.default_type.map(|k| k.as_str()))
            .unwrap_or_default()
    }

    /// The stored tag parsed into a known kind, if it is one.
    pub fn stored_kind(&self) -> Option<TransactionType> {
        TransactionType::from_tag(self.transaction_type())
    }

    /// Recognised fields: the base list followed by the variant's own.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn recognises(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Raw value of a recognised field. Unrecognised fields read as absent
    /// even when the record carries them.
    pub fn field_value(&self, field: Field) -> Option<&Value> {
        if !self.recognises(field) {
            return None;
        }
        self.tx.get(field)
    }

    /// Copy of the record restricted to recognised fields, without the
    /// signature and hash.
    pub fn signing_record(&self) -> TxRecord {
        let mut record = self.tx.clone();
        record.retain(|key| {
            Field::from_name(key)
                .is_some_and(|f| self.recognises(f) && !SIGNATURE_FIELDS.contains(&f))
        });
        record
    }

    // ── Common fields ──────────────────────────────────────────────────

    pub fn account(&self) -> Option<AccountAddress> {
        self.tx.account(Field::Account)
    }

    pub fn sequence(&self) -> Option<u32> {
        self.tx.uint32(Field::Sequence)
    }

    /// Fee in drops.
    pub fn fee(&self) -> Option<u64> {
        self.tx.drops(Field::Fee)
    }

    pub fn flags(&self) -> Option<u32> {
        self.tx.uint32(Field::Flags)
    }

    /// Whether every bit of `mask` is set in `Flags`. Absent flags have no
    /// bits set; an empty mask is always satisfied.
    pub fn has_flag(&self, mask: u32) -> bool {
        self.flags().unwrap_or(0) & mask == mask
    }

    pub fn last_ledger_sequence(&self) -> Option<u32> {
        self.tx.uint32(Field::LastLedgerSequence)
    }

    pub fn source_tag(&self) -> Option<u32> {
        self.tx.uint32(Field::SourceTag)
    }

    pub fn ticket_sequence(&self) -> Option<u32> {
        self.tx.uint32(Field::TicketSequence)
    }

    /// Attached memos; malformed entries are skipped.
    pub fn memos(&self) -> Option<Vec<Memo>> {
        self.tx.array(Field::Memos).map(|values| memos_from_json(values))
    }

    pub fn signing_pub_key(&self) -> Option<&str> {
        self.tx.string(Field::SigningPubKey)
    }

    pub fn txn_signature(&self) -> Option<&str> {
        self.tx.string(Field::TxnSignature)
    }

    pub fn hash(&self) -> Option<Hash256> {
        self.tx.hash256(Field::Hash)
    }

    // ── Draft setters ──────────────────────────────────────────────────

    pub fn set_account(&mut self, account: &AccountAddress) {
        self.tx.insert(Field::Account, account.as_str());
    }

    pub fn set_sequence(&mut self, sequence: u32) {
        self.tx.insert(Field::Sequence, sequence);
    }

    /// Fee in drops; stored as the ledger's decimal string.
    pub fn set_fee(&mut self, drops: u64) {
        self.tx.insert(Field::Fee, drops.to_string());
    }

    pub fn set_flags(&mut self, flags: u32) {
        self.tx.insert(Field::Flags, flags);
    }

    pub fn set_last_ledger_sequence(&mut self, sequence: u32) {
        self.tx.insert(Field::LastLedgerSequence, sequence);
    }

    pub fn set_memos(&mut self, memos: &[Memo]) {
        if memos.is_empty() {
            self.tx.remove(Field::Memos);
        } else {
            self.tx.insert(Field::Memos, memos_to_json(memos));
        }
    }
}

fn merge_fields(extra: &[Field]) -> Vec<Field> {
    let mut fields = BASE_FIELDS.to_vec();
    for field in extra {
        if !fields.contains(field) {
            fields.push(*field);
        }
    }
    fields
}
