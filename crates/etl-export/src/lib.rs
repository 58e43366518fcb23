//! Export glue for the ledger ETL.
//!
//! Combines checkpoint planning, change classification and metadata
//! extraction into the pieces export commands drive:
//!
//! - [`ExportConfig`] — Range, batch size, limit and entry-type selection, loaded from TOML
//! - [`ExportRun`] — Batch planning and the export-wide entry limit
//! - [`ChangeBatch`] — Classified changes for one batch of ledgers, grouped by entry type
//!
//! Fetching ledgers and writing rows stay with the caller.

pub mod batch;
pub mod config;
pub mod error;
pub mod run;

pub use batch::ChangeBatch;
pub use config::ExportConfig;
pub use error::{ConfigError, ExportError, ExportResult};
pub use run::ExportRun;
