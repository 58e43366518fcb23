//! One export over a configured ledger range.

use tracing::debug;

use etl_checkpoint::{checkpoint_aligned, plan_batches, LedgerRange};
use etl_types::{ChangeRecord, LedgerSeq};

use crate::batch::ChangeBatch;
use crate::config::ExportConfig;
use crate::error::ExportResult;

/// Drives an export batch by batch and enforces the entry limit across all
/// of them.
///
/// Each batch started through [`ExportRun::start_batch`] may keep only what
/// is left of the limit; [`ExportRun::finish_batch`] charges the batch's kept
/// changes against it.
#[derive(Clone, Debug)]
pub struct ExportRun {
    config: ExportConfig,
    range: LedgerRange,
    exported: usize,
}

impl ExportRun {
    /// Validate `config` and start an export with nothing exported yet.
    pub fn new(config: ExportConfig) -> ExportResult<Self> {
        config.validate()?;
        let range = config.ledger_range()?;
        Ok(Self {
            config,
            range,
            exported: 0,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// The configured ledgers.
    pub fn range(&self) -> LedgerRange {
        self.range
    }

    /// The configured range split into output batches.
    pub fn batches(&self) -> ExportResult<Vec<LedgerRange>> {
        Ok(plan_batches(self.range, self.config.batch_size)?)
    }

    /// The range a history archive reader must fetch, given the highest
    /// published ledger.
    pub fn archive_range(&self, max_seq: LedgerSeq) -> ExportResult<LedgerRange> {
        Ok(checkpoint_aligned(self.range, max_seq)?)
    }

    /// Entries left under the limit, or `None` when unlimited.
    pub fn remaining(&self) -> Option<usize> {
        self.config
            .max_objects()
            .map(|limit| limit.saturating_sub(self.exported))
    }

    /// Total changes kept by finished batches.
    pub fn exported(&self) -> usize {
        self.exported
    }

    pub fn limit_reached(&self) -> bool {
        self.remaining() == Some(0)
    }

    /// An empty batch for `range` that may keep at most [`ExportRun::remaining`] changes.
    pub fn start_batch(&self, range: LedgerRange) -> ChangeBatch {
        ChangeBatch::new(range, &self.config).with_limit(self.remaining())
    }

    /// Charge a completed batch against the limit.
    pub fn finish_batch(&mut self, batch: &ChangeBatch) {
        self.exported += batch.len();
        debug!(
            range = %batch.range(),
            kept = batch.len(),
            skipped = batch.skipped(),
            exported = self.exported,
            "finished export batch"
        );
    }

    /// Start, fill and finish one batch.
    pub fn classify_batch<I>(&mut self, range: LedgerRange, changes: I) -> ExportResult<ChangeBatch>
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        let mut batch = self.start_batch(range);
        batch.extend(changes)?;
        self.finish_batch(&batch);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etl_checkpoint::CheckpointError;
    use etl_types::{LedgerEntry, LedgerEntryData};

    use crate::error::{ConfigError, ExportError};

    fn account(seq: u32, balance: i64) -> ChangeRecord {
        ChangeRecord::created(LedgerEntry::new(
            seq,
            LedgerEntryData::Account {
                account_id: "GACCOUNT".into(),
                balance,
                seq_num: 1,
            },
        ))
    }

    fn config(limit: i64) -> ExportConfig {
        ExportConfig {
            start_ledger: 1,
            end_ledger: 192,
            batch_size: 64,
            limit,
            ..Default::default()
        }
    }

    #[test]
    fn limit_spans_all_batches() {
        let mut run = ExportRun::new(config(2)).unwrap();
        let batches = run.batches().unwrap();
        assert_eq!(batches.len(), 3);

        let mut total = 0;
        for range in batches {
            let changes = (0..5).map(|i| account(range.start(), i));
            total += run.classify_batch(range, changes).unwrap().len();
        }

        assert_eq!(total, 2);
        assert_eq!(run.exported(), 2);
        assert!(run.limit_reached());
    }

    #[test]
    fn limit_carries_remainder_to_next_batch() {
        let mut run = ExportRun::new(config(7)).unwrap();
        let batches = run.batches().unwrap();

        let first = run
            .classify_batch(batches[0], (0..5).map(|i| account(1, i)))
            .unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(run.remaining(), Some(2));

        let second = run
            .classify_batch(batches[1], (0..5).map(|i| account(65, i)))
            .unwrap();
        assert_eq!(second.len(), 2);
        assert!(second.limit_reached());

        let third = run
            .classify_batch(batches[2], (0..5).map(|i| account(129, i)))
            .unwrap();
        assert!(third.is_empty());
        assert_eq!(run.exported(), 7);
    }

    #[test]
    fn unlimited_run_keeps_everything() {
        let mut run = ExportRun::new(config(-1)).unwrap();
        for range in run.batches().unwrap() {
            run.classify_batch(range, (0..5).map(|i| account(range.start(), i)))
                .unwrap();
        }
        assert_eq!(run.exported(), 15);
        assert_eq!(run.remaining(), None);
        assert!(!run.limit_reached());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = ExportRun::new(ExportConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Config(ConfigError::Range(CheckpointError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn archive_range_past_head() {
        let run = ExportRun::new(config(-1)).unwrap();
        assert_eq!(run.archive_range(1_000).unwrap().end(), 255);
        assert!(matches!(
            run.archive_range(200),
            Err(ExportError::Checkpoint(CheckpointError::OutOfRange {
                checkpoint: 255,
                max_seq: 200
            }))
        ));
    }
}
