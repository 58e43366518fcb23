//! Error types for the change crate.

use etl_types::{ChangeType, SnapshotSide};

/// Errors that can occur while classifying a change record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeError {
    /// The record's tag is not created, updated or removed.
    #[error("unable to extract ledger entry from change: unknown change type {0}")]
    UnknownChangeType(i32),

    /// The record lacks the snapshot its tag requires.
    #[error("{change_type} change is missing its {side} snapshot")]
    MissingSnapshot {
        change_type: ChangeType,
        side: SnapshotSide,
    },
}

/// Convenience alias for change results.
pub type ChangeResult<T> = Result<T, ChangeError>;
