//! Ledger metadata extraction for the ledger ETL.
//!
//! Reads header fields out of [`LedgerCloseMeta`](etl_types::LedgerCloseMeta)
//! and converts raw wire values (close times, stroop amounts) into the forms
//! export rows use.

pub mod amount;
pub mod close_time;
pub mod error;

pub use amount::{stroops_to_real, STROOPS_PER_UNIT};
pub use close_time::{extract_close_time, extract_ledger_sequence, time_point_to_utc};
pub use error::{MetaError, MetaResult};
