use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::LedgerSeq;

/// A snapshot of one ledger entry as of some ledger close.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The ledger in which this entry was last modified.
    pub last_modified_ledger_seq: LedgerSeq,
    /// The entry body.
    pub data: LedgerEntryData,
}

impl LedgerEntry {
    pub fn new(last_modified_ledger_seq: LedgerSeq, data: LedgerEntryData) -> Self {
        Self {
            last_modified_ledger_seq,
            data,
        }
    }

    /// The kind of entry this snapshot holds.
    pub fn entry_type(&self) -> LedgerEntryType {
        self.data.entry_type()
    }
}

/// Entry bodies the export tooling knows how to transform.
///
/// Amounts are in stroops (1 unit = 10^7 stroops).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEntryData {
    Account {
        account_id: String,
        balance: i64,
        seq_num: i64,
    },
    Trustline {
        account_id: String,
        asset_code: String,
        asset_issuer: String,
        balance: i64,
        limit: i64,
    },
    Offer {
        seller_id: String,
        offer_id: i64,
        selling: String,
        buying: String,
        amount: i64,
    },
}

impl LedgerEntryData {
    pub fn entry_type(&self) -> LedgerEntryType {
        match self {
            Self::Account { .. } => LedgerEntryType::Account,
            Self::Trustline { .. } => LedgerEntryType::Trustline,
            Self::Offer { .. } => LedgerEntryType::Offer,
        }
    }
}

/// Discriminant of [`LedgerEntryData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerEntryType {
    Account,
    Trustline,
    Offer,
}

impl LedgerEntryType {
    /// Every entry type, in export order.
    pub const ALL: [LedgerEntryType; 3] = [Self::Account, Self::Trustline, Self::Offer];
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Trustline => write!(f, "trustline"),
            Self::Offer => write!(f, "offer"),
        }
    }
}
