//! Checkpoint arithmetic for the ledger ETL.
//!
//! History archives publish a checkpoint every [`CHECKPOINT_FREQUENCY`]
//! ledgers, at sequences 63, 127, 191, ... The first checkpoint covers 63
//! ledgers (there is no ledger 0), every later one covers 64.
//!
//! # Key Items
//!
//! - [`next_checkpoint`] — Checkpoint at or after a ledger
//! - [`most_recent_checkpoint`] — Checkpoint at or before a ledger
//! - [`LedgerRange`] — Inclusive ledger range
//! - [`checkpoint_aligned`] — Widen a range to whole checkpoint intervals
//! - [`plan_batches`] — Split a range into fixed-size batches
//!
//! All functions are pure and safe to call from any thread.

pub mod calculator;
pub mod error;
pub mod range;

pub use calculator::{
    checked_most_recent_checkpoint, is_checkpoint, most_recent_checkpoint, next_checkpoint,
};
pub use error::{CheckpointError, CheckpointResult};
pub use etl_types::CHECKPOINT_FREQUENCY;
pub use range::{checkpoint_aligned, plan_batches, LedgerRange, DEFAULT_BATCH_SIZE};
