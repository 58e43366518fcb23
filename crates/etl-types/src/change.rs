use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::LedgerEntry;
use crate::error::TypeError;

/// How a ledger entry changed across one ledger close.
///
/// Only these three tags are meaningful for export. Raw records carry the
/// tag as an integer code; convert once with [`ChangeType::from_code`] and
/// match exhaustively afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Created,
    Updated,
    Removed,
}

impl ChangeType {
    /// Wire code of each tag. Code 3 ("state") and anything else is not a change.
    pub const fn code(self) -> i32 {
        match self {
            Self::Created => 0,
            Self::Updated => 1,
            Self::Removed => 2,
        }
    }

    /// Decode a wire code.
    pub fn from_code(code: i32) -> Result<Self, TypeError> {
        match code {
            0 => Ok(Self::Created),
            1 => Ok(Self::Updated),
            2 => Ok(Self::Removed),
            other => Err(TypeError::UnknownChangeType(other)),
        }
    }

    /// The snapshot side that holds the entry's current state.
    pub const fn current_side(self) -> SnapshotSide {
        match self {
            Self::Created | Self::Updated => SnapshotSide::Post,
            Self::Removed => SnapshotSide::Pre,
        }
    }
}

impl TryFrom<i32> for ChangeType {
    type Error = TypeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// Which snapshot of a [`ChangeRecord`] is meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotSide {
    /// State before the ledger closed.
    Pre,
    /// State after the ledger closed.
    Post,
}

impl fmt::Display for SnapshotSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pre => write!(f, "pre"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A raw change record as produced by ingestion.
///
/// Producers guarantee that created and updated records carry `post` and
/// removed records carry `pre`; consumers still check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Wire code of the change tag, see [`ChangeType::code`].
    pub change_type: i32,
    pub pre: Option<LedgerEntry>,
    pub post: Option<LedgerEntry>,
}

impl ChangeRecord {
    pub fn created(post: LedgerEntry) -> Self {
        Self {
            change_type: ChangeType::Created.code(),
            pre: None,
            post: Some(post),
        }
    }

    pub fn updated(pre: LedgerEntry, post: LedgerEntry) -> Self {
        Self {
            change_type: ChangeType::Updated.code(),
            pre: Some(pre),
            post: Some(post),
        }
    }

    pub fn removed(pre: LedgerEntry) -> Self {
        Self {
            change_type: ChangeType::Removed.code(),
            pre: Some(pre),
            post: None,
        }
    }

    /// The snapshot on the given side, if present.
    pub fn snapshot(&self, side: SnapshotSide) -> Option<&LedgerEntry> {
        match side {
            SnapshotSide::Pre => self.pre.as_ref(),
            SnapshotSide::Post => self.post.as_ref(),
        }
    }
}
