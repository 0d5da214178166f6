//! Account management transactions: settings, deletion, regular key and
//! multi-signing setup.

use serde_json::Value;
use xledger_types::AccountAddress;

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Change account settings and flags.
    AccountSet, [SetFlag, ClearFlag, Domain, EmailHash, MessageKey, TransferRate, TickSize]
}

transaction_variant! {
    /// Delete the sending account, sending its remaining XRP to `Destination`.
    AccountDelete, [Destination, DestinationTag]
}

transaction_variant! {
    /// Assign, change or remove the account's regular key pair.
    SetRegularKey, [RegularKey]
}

transaction_variant! {
    /// Create, replace or remove the account's signer list.
    SignerListSet, [SignerQuorum, SignerEntries]
}

impl AccountSet {
    /// Account flag (`asf*`) to enable.
    pub fn set_flag(&self) -> Option<u32> {
        self.record().uint32(Field::SetFlag)
    }

    /// Account flag (`asf*`) to disable.
    pub fn clear_flag(&self) -> Option<u32> {
        self.record().uint32(Field::ClearFlag)
    }

    /// Hex-encoded domain as stored on the ledger.
    pub fn domain(&self) -> Option<&str> {
        self.record().string(Field::Domain)
    }

    /// The domain decoded to text, if it is valid hex and UTF-8.
    pub fn decoded_domain(&self) -> Option<String> {
        let bytes = hex::decode(self.domain()?).ok()?;
        String::from_utf8(bytes).ok()
    }

    pub fn email_hash(&self) -> Option<&str> {
        self.record().string(Field::EmailHash)
    }

    pub fn message_key(&self) -> Option<&str> {
        self.record().string(Field::MessageKey)
    }

    pub fn transfer_rate(&self) -> Option<u32> {
        self.record().uint32(Field::TransferRate)
    }

    pub fn tick_size(&self) -> Option<u8> {
        self.record().uint8(Field::TickSize)
    }
}

impl AccountDelete {
    pub fn destination(&self) -> Option<AccountAddress> {
        self.record().account(Field::Destination)
    }

    pub fn destination_tag(&self) -> Option<u32> {
        self.record().uint32(Field::DestinationTag)
    }
}

impl SetRegularKey {
    /// The new regular key; absent means the key is being removed.
    pub fn regular_key(&self) -> Option<AccountAddress> {
        self.record().account(Field::RegularKey)
    }
}

/// One member of a signer list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerEntry {
    pub account: AccountAddress,
    pub signer_weight: u16,
}

impl SignerEntry {
    /// Read one `{"SignerEntry": {...}}` wrapper.
    pub fn from_json(value: &Value) -> Option<Self> {
        let inner = value.get("SignerEntry")?;
        let account = inner.get("Account")?.as_str()?;
        let weight = inner.get("SignerWeight")?.as_u64()?;
        Some(Self {
            account: AccountAddress::new_unchecked(account),
            signer_weight: u16::try_from(weight).ok()?,
        })
    }
}

impl SignerListSet {
    pub fn signer_quorum(&self) -> Option<u32> {
        self.record().uint32(Field::SignerQuorum)
    }

    /// Signer entries; malformed entries are skipped.
    pub fn signer_entries(&self) -> Option<Vec<SignerEntry>> {
        self.record()
            .array(Field::SignerEntries)
            .map(|values| values.iter().filter_map(SignerEntry::from_json).collect())
    }
}
