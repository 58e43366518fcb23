//! Error types for the export crate.

use std::io;
use std::path::PathBuf;

use etl_checkpoint::{CheckpointError, LedgerRange};
use etl_types::LedgerSeq;

/// Errors raised while loading or validating an [`ExportConfig`](crate::ExportConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("invalid export range: {0}")]
    Range(#[from] CheckpointError),
}

/// Errors produced while planning or classifying an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    /// Raised only under strict export; otherwise the record is skipped.
    #[error("change in batch {range} could not be classified: {source}")]
    Change {
        range: LedgerRange,
        #[source]
        source: etl_change::ChangeError,
    },

    #[error(transparent)]
    Meta(#[from] etl_meta::MetaError),

    #[error("ledger {seq} is outside batch {range}")]
    LedgerOutsideBatch { seq: LedgerSeq, range: LedgerRange },
}

/// Convenience alias for export results.
pub type ExportResult<T> = Result<T, ExportError>;
