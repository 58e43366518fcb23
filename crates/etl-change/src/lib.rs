//! Change classification for the ledger ETL.
//!
//! Turns a raw [`ChangeRecord`](etl_types::ChangeRecord) into the entry's
//! current state plus a deletion flag, the pair downstream transforms write
//! to their sinks.
//!
//! # Key Types
//!
//! - [`extract_entry_from_change`] — `(entry, deleted)` for one record
//! - [`ClassifiedChange`] — The same, keeping the change tag
//! - [`ChangeError`] — Unknown tags and records missing their snapshot

pub mod classify;
pub mod error;

pub use classify::{classify, extract_entry_from_change, ClassifiedChange};
pub use error::{ChangeError, ChangeResult};
