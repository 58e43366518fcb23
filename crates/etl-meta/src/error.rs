/// Errors produced while reading ledger metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    /// The ledger is not in the version 0 encoding. Needs a newer extractor.
    #[error("unsupported ledger close meta version {version}: only v0 can be read")]
    UnsupportedLedgerFormat { version: u32 },

    /// The close time is negative or outside the representable date range.
    /// Indicates a corrupt ledger.
    #[error("invalid close time {0}: expected non-negative seconds since the UNIX epoch")]
    InvalidTimestamp(i64),
}

/// Convenience alias for metadata results.
pub type MetaResult<T> = Result<T, MetaError>;
