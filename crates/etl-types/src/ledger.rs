use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::hash::LedgerHash;
use crate::sequence::LedgerSeq;

/// Header fields of a closed ledger that export tooling reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    pub ledger_seq: LedgerSeq,
    pub previous_ledger_hash: LedgerHash,
    /// Seconds since the UNIX epoch. Signed on the wire; valid ledgers never
    /// carry a negative value.
    pub close_time: i64,
}

/// Version 0 close metadata: the ledger's hash and header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerCloseMetaV0 {
    pub ledger_hash: LedgerHash,
    pub header: LedgerHeader,
}

/// Metadata emitted when a ledger closes.
///
/// Only version 0 is decoded. Newer encodings are kept as
/// [`LedgerCloseMeta::Unsupported`] so callers can report them instead of
/// misreading their fields. Version 0 always decodes to [`LedgerCloseMeta::V0`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCloseMeta {
    V0(LedgerCloseMetaV0),
    Unsupported { version: NonZeroU32 },
}

impl LedgerCloseMeta {
    pub fn v0(ledger_hash: LedgerHash, header: LedgerHeader) -> Self {
        Self::V0(LedgerCloseMetaV0 {
            ledger_hash,
            header,
        })
    }

    /// Encoding version of this metadata.
    pub fn version(&self) -> u32 {
        match self {
            Self::V0(_) => 0,
            Self::Unsupported { version } => version.get(),
        }
    }

    /// The version 0 body, if that is the encoding.
    pub fn as_v0(&self) -> Option<&LedgerCloseMetaV0> {
        match self {
            Self::V0(v0) => Some(v0),
            Self::Unsupported { .. } => None,
        }
    }
}
