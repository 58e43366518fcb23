//! Classified changes for one batch of ledgers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use etl_change::{classify, ClassifiedChange};
use etl_checkpoint::LedgerRange;
use etl_meta::{extract_close_time, extract_ledger_sequence};
use etl_types::{ChangeRecord, LedgerCloseMeta, LedgerEntryType};

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

/// Changes collected for one batch of ledgers, grouped by entry type.
///
/// Records of types the config does not select are dropped. Records that
/// cannot be classified abort the batch under strict export and are
/// counted as skipped otherwise. The export-wide entry limit is applied by
/// [`ExportRun`](crate::ExportRun), which hands each batch what is left of it.
#[derive(Clone, Debug)]
pub struct ChangeBatch {
    range: LedgerRange,
    enabled: Vec<LedgerEntryType>,
    strict: bool,
    limit: Option<usize>,
    changes: BTreeMap<LedgerEntryType, Vec<ClassifiedChange>>,
    kept: usize,
    skipped: usize,
    closed_at: Option<DateTime<Utc>>,
}

impl ChangeBatch {
    /// An empty, unlimited batch for `range`, filtered per `config`.
    pub fn new(range: LedgerRange, config: &ExportConfig) -> Self {
        Self {
            range,
            enabled: config.enabled_types(),
            strict: config.strict_export,
            limit: None,
            changes: BTreeMap::new(),
            kept: 0,
            skipped: 0,
            closed_at: None,
        }
    }

    /// Cap the number of changes this batch keeps.
    pub(crate) fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Classify every record of `changes` into a new batch.
    pub fn from_changes<I>(
        range: LedgerRange,
        config: &ExportConfig,
        changes: I,
    ) -> ExportResult<Self>
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        let mut batch = Self::new(range, config);
        batch.extend(changes)?;
        Ok(batch)
    }

    /// Classify one record. Returns `true` if it was kept.
    pub fn push(&mut self, change: ChangeRecord) -> ExportResult<bool> {
        if self.limit_reached() {
            return Ok(false);
        }

        let classified = match classify(change) {
            Ok(classified) => classified,
            Err(source) if self.strict => {
                return Err(ExportError::Change {
                    range: self.range,
                    source,
                });
            }
            Err(err) => {
                warn!(
                    range = %self.range,
                    error = %err,
                    "skipping change that could not be classified"
                );
                self.skipped += 1;
                return Ok(false);
            }
        };

        let entry_type = classified.entry_type();
        if !self.enabled.contains(&entry_type) {
            return Ok(false);
        }

        self.changes.entry(entry_type).or_default().push(classified);
        self.kept += 1;
        if self.limit_reached() {
            debug!(range = %self.range, kept = self.kept, "batch limit reached");
        }
        Ok(true)
    }

    /// Classify all of `changes`, stopping at the first strict failure.
    pub fn extend<I>(&mut self, changes: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        for change in changes {
            self.push(change)?;
        }
        Ok(())
    }

    /// Record that `ledger` belongs to this batch and track its close time.
    ///
    /// The latest close time seen is reported by [`ChangeBatch::closed_at`].
    pub fn observe_ledger(&mut self, ledger: &LedgerCloseMeta) -> ExportResult<()> {
        let seq = extract_ledger_sequence(ledger)?;
        if !self.range.contains(seq) {
            return Err(ExportError::LedgerOutsideBatch {
                seq,
                range: self.range,
            });
        }

        let close_time = extract_close_time(ledger)?;
        if self.closed_at.map_or(true, |latest| close_time > latest) {
            self.closed_at = Some(close_time);
        }
        Ok(())
    }

    pub fn range(&self) -> LedgerRange {
        self.range
    }

    /// Kept changes of one entry type, in arrival order.
    pub fn changes(&self, entry_type: LedgerEntryType) -> &[ClassifiedChange] {
        self.changes
            .get(&entry_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over kept changes grouped by entry type.
    pub fn iter(&self) -> impl Iterator<Item = (LedgerEntryType, &[ClassifiedChange])> + '_ {
        self.changes.iter().map(|(t, c)| (*t, c.as_slice()))
    }

    /// Number of kept changes.
    pub fn len(&self) -> usize {
        self.kept
    }

    pub fn is_empty(&self) -> bool {
        self.kept == 0
    }

    /// Number of records dropped because they could not be classified.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Latest close time of the ledgers observed so far.
    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    pub fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.kept >= limit)
    }
}
