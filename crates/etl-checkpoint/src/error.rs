//! Error types for the checkpoint crate.

use etl_types::LedgerSeq;

/// Errors produced by checkpoint and range computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckpointError {
    /// The checkpoint boundary lies past the highest known ledger.
    /// Recoverable: wait for more ledgers or shrink the range.
    #[error("checkpoint ledger {checkpoint} is greater than the max ledger number {max_seq}")]
    OutOfRange {
        checkpoint: LedgerSeq,
        max_seq: LedgerSeq,
    },

    /// Ledger 0 does not exist.
    #[error("ledger 0 does not exist; ranges start at the genesis ledger")]
    ZeroLedger,

    #[error("invalid ledger range: start={start}, end={end}")]
    InvalidRange { start: LedgerSeq, end: LedgerSeq },

    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

/// Convenience alias for checkpoint results.
pub type CheckpointResult<T> = Result<T, CheckpointError>;
