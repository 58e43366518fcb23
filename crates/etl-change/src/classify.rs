//! Projection of a change record onto the entry's current state.

use serde::{Deserialize, Serialize};

use etl_types::{ChangeRecord, ChangeType, LedgerEntry, LedgerEntryType};

use crate::error::{ChangeError, ChangeResult};

/// A change record reduced to what export needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedChange {
    /// The entry's latest state: the post snapshot, or the pre snapshot for removals.
    pub entry: LedgerEntry,
    /// `true` if the entry no longer exists after the ledger closed.
    pub deleted: bool,
    pub change_type: ChangeType,
}

impl ClassifiedChange {
    pub fn entry_type(&self) -> LedgerEntryType {
        self.entry.entry_type()
    }
}

/// Classify a change record.
///
/// Created and updated records yield their post snapshot and are not
/// deleted; removed records yield their pre snapshot and are deleted. Any
/// other tag fails with [`ChangeError::UnknownChangeType`].
pub fn classify(change: ChangeRecord) -> ChangeResult<ClassifiedChange> {
    let code = change.change_type;
    let change_type =
        ChangeType::from_code(code).map_err(|_| ChangeError::UnknownChangeType(code))?;

    let (snapshot, deleted) = match change_type {
        ChangeType::Created | ChangeType::Updated => (change.post, false),
        ChangeType::Removed => (change.pre, true),
    };

    let entry = snapshot.ok_or(ChangeError::MissingSnapshot {
        change_type,
        side: change_type.current_side(),
    })?;

    Ok(ClassifiedChange {
        entry,
        deleted,
        change_type,
    })
}

/// The most recent state of the changed entry and whether it was deleted.
pub fn extract_entry_from_change(change: ChangeRecord) -> ChangeResult<(LedgerEntry, bool)> {
    let classified = classify(change)?;
    Ok((classified.entry, classified.deleted))
}
