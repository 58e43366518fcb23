//! Foundation types for the ledger ETL.
//!
//! Every other `etl-*` crate depends on `etl-types`. The types here are plain
//! values handed in by archive and ingestion tooling; nothing in this crate
//! performs I/O or holds state across calls.
//!
//! # Key Types
//!
//! - [`LedgerSeq`] — Ledger sequence number (ledger 0 does not exist)
//! - [`LedgerHash`] — 32-byte ledger or transaction hash with hex rendering
//! - [`LedgerEntry`] / [`LedgerEntryData`] — Snapshot of one ledger entry
//! - [`ChangeType`] / [`ChangeRecord`] — How one entry changed across a ledger close
//! - [`LedgerCloseMeta`] / [`LedgerHeader`] — Per-ledger close metadata

pub mod change;
pub mod entry;
pub mod error;
pub mod hash;
pub mod ledger;
pub mod sequence;

pub use change::{ChangeRecord, ChangeType, SnapshotSide};
pub use entry::{LedgerEntry, LedgerEntryData, LedgerEntryType};
pub use error::TypeError;
pub use hash::LedgerHash;
pub use ledger::{LedgerCloseMeta, LedgerCloseMetaV0, LedgerHeader};
pub use sequence::{LedgerSeq, CHECKPOINT_FREQUENCY, GENESIS_LEDGER};
