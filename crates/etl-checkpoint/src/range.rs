//! Ledger ranges aligned to checkpoints and split into batches.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use etl_types::{LedgerSeq, GENESIS_LEDGER};

use crate::calculator::{checked_most_recent_checkpoint, next_checkpoint};
use crate::error::{CheckpointError, CheckpointResult};

/// Batch size used by export tooling when none is configured.
pub const DEFAULT_BATCH_SIZE: u32 = 64;

/// An inclusive range of ledgers, `start..=end`, never containing ledger 0.
///
/// Deserialization goes through [`LedgerRange::new`], so serialized ranges
/// are checked the same way as constructed ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLedgerRange")]
pub struct LedgerRange {
    start: LedgerSeq,
    end: LedgerSeq,
}

/// Unchecked wire form of [`LedgerRange`].
#[derive(Deserialize)]
struct RawLedgerRange {
    start: LedgerSeq,
    end: LedgerSeq,
}

impl TryFrom<RawLedgerRange> for LedgerRange {
    type Error = CheckpointError;

    fn try_from(raw: RawLedgerRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl LedgerRange {
    pub fn new(start: LedgerSeq, end: LedgerSeq) -> CheckpointResult<Self> {
        if start == 0 {
            return Err(CheckpointError::ZeroLedger);
        }
        if start > end {
            return Err(CheckpointError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range holding exactly one ledger.
    pub fn single(seq: LedgerSeq) -> CheckpointResult<Self> {
        Self::new(seq, seq)
    }

    pub fn start(&self) -> LedgerSeq {
        self.start
    }

    pub fn end(&self) -> LedgerSeq {
        self.end
    }

    /// Number of ledgers in the range. Always at least 1.
    pub fn ledger_count(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }

    pub fn contains(&self, seq: LedgerSeq) -> bool {
        (self.start..=self.end).contains(&seq)
    }
}

impl fmt::Display for LedgerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Widen `range` to whole checkpoint intervals.
///
/// The start moves down to the first ledger after the preceding checkpoint
/// (or genesis), the end moves up to the next checkpoint. This is the range
/// a history archive reader must fetch to cover `range`. Fails with
/// [`CheckpointError::OutOfRange`] if the closing checkpoint is past `max_seq`.
pub fn checkpoint_aligned(range: LedgerRange, max_seq: LedgerSeq) -> CheckpointResult<LedgerRange> {
    let start = checked_most_recent_checkpoint(range.start - 1)
        .map(|c| c + 1)
        .unwrap_or(GENESIS_LEDGER);
    let end = next_checkpoint(range.end, max_seq)?;

    debug!(%range, start, end, "aligned range to checkpoints");
    Ok(LedgerRange { start, end })
}

/// Split `range` into consecutive batches of at most `batch_size` ledgers.
///
/// Batches are returned in order and cover the range exactly; only the last
/// one may be shorter.
pub fn plan_batches(range: LedgerRange, batch_size: u32) -> CheckpointResult<Vec<LedgerRange>> {
    if batch_size == 0 {
        return Err(CheckpointError::ZeroBatchSize);
    }

    let end = u64::from(range.end);
    let step = u64::from(batch_size);
    let mut batches = Vec::new();
    let mut start = u64::from(range.start);

    while start <= end {
        let batch_end = (start + step - 1).min(end);
        // Both bounds lie within `range`, so they fit in a LedgerSeq.
        batches.push(LedgerRange {
            start: start as LedgerSeq,
            end: batch_end as LedgerSeq,
        });
        start = batch_end + 1;
    }

    debug!(%range, batch_size, batches = batches.len(), "planned export batches");
    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(start: u32, end: u32) -> LedgerRange {
        LedgerRange::new(start, end).unwrap()
    }

    #[test]
    fn rejects_ledger_zero() {
        assert_eq!(LedgerRange::new(0, 10), Err(CheckpointError::ZeroLedger));
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            LedgerRange::new(10, 9),
            Err(CheckpointError::InvalidRange { start: 10, end: 9 })
        );
    }

    #[test]
    fn deserialize_checks_bounds() {
        let ok: LedgerRange = serde_json::from_str(r#"{"start": 64, "end": 127}"#).unwrap();
        assert_eq!(ok, range(64, 127));

        let zero = serde_json::from_str::<LedgerRange>(r#"{"start": 0, "end": 5}"#).unwrap_err();
        assert!(zero.to_string().contains("ledger 0 does not exist"));

        let inverted =
            serde_json::from_str::<LedgerRange>(r#"{"start": 10, "end": 5}"#).unwrap_err();
        assert!(inverted
            .to_string()
            .contains("invalid ledger range: start=10, end=5"));
    }

    #[test]
    fn serialized_range_reads_back() {
        let json = serde_json::to_string(&range(100, 200)).unwrap();
        assert_eq!(json, r#"{"start":100,"end":200}"#);
        assert_eq!(serde_json::from_str::<LedgerRange>(&json).unwrap(), range(100, 200));
    }

    #[test]
    fn len_and_contains() {
        let r = range(64, 127);
        assert_eq!(r.ledger_count(), 64);
        assert!(r.contains(64));
        assert!(r.contains(127));
        assert!(!r.contains(128));
        assert_eq!(LedgerRange::single(5).unwrap().ledger_count(), 1);
        assert_eq!(range(1, u32::MAX).ledger_count(), u64::from(u32::MAX));
        assert_eq!(r.to_string(), "[64, 127]");
    }

    #[test]
    fn aligned_first_interval() {
        assert_eq!(checkpoint_aligned(range(1, 10), 1000), Ok(range(1, 63)));
        assert_eq!(checkpoint_aligned(range(63, 63), 1000), Ok(range(1, 63)));
    }

    #[test]
    fn aligned_spans_intervals() {
        assert_eq!(checkpoint_aligned(range(64, 64), 1000), Ok(range(64, 127)));
        assert_eq!(checkpoint_aligned(range(100, 200), 1000), Ok(range(64, 255)));
        assert_eq!(checkpoint_aligned(range(128, 191), 1000), Ok(range(128, 191)));
    }

    #[test]
    fn aligned_end_past_max() {
        assert_eq!(
            checkpoint_aligned(range(64, 64), 100),
            Err(CheckpointError::OutOfRange {
                checkpoint: 127,
                max_seq: 100
            })
        );
    }

    #[test]
    fn zero_batch_size_rejected() {
        assert_eq!(
            plan_batches(range(1, 10), 0),
            Err(CheckpointError::ZeroBatchSize)
        );
    }

    #[test]
    fn batches_with_short_tail() {
        let batches = plan_batches(range(1, 150), DEFAULT_BATCH_SIZE).unwrap();
        assert_eq!(batches, vec![range(1, 64), range(65, 128), range(129, 150)]);
    }

    #[test]
    fn batch_larger_than_range() {
        assert_eq!(plan_batches(range(5, 9), 100).unwrap(), vec![range(5, 9)]);
    }

    #[test]
    fn batches_reach_top_of_sequence_space() {
        let batches = plan_batches(range(u32::MAX - 9, u32::MAX), 4).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].end(), u32::MAX);
    }

    proptest! {
        #[test]
        fn batches_cover_range_exactly(
            start in 1u32..100_000,
            len in 0u32..10_000,
            batch_size in 1u32..500,
        ) {
            let r = range(start, start + len);
            let batches = plan_batches(r, batch_size).unwrap();

            prop_assert_eq!(batches.first().map(|b| b.start()), Some(r.start()));
            prop_assert_eq!(batches.last().map(|b| b.end()), Some(r.end()));
            for pair in batches.windows(2) {
                prop_assert_eq!(pair[0].end() + 1, pair[1].start());
            }
            for batch in &batches {
                prop_assert!(batch.ledger_count() <= u64::from(batch_size));
            }
            let total: u64 = batches.iter().map(|b| b.ledger_count()).sum();
            prop_assert_eq!(total, r.ledger_count());
        }

        #[test]
        fn aligned_range_contains_input(start in 1u32..1_000_000, len in 0u32..1_000) {
            let r = range(start, start + len);
            let aligned = checkpoint_aligned(r, u32::MAX).unwrap();
            prop_assert!(aligned.start() <= r.start());
            prop_assert!(aligned.end() >= r.end());
            prop_assert!(crate::is_checkpoint(aligned.end()));
            prop_assert!(aligned.start() == 1 || crate::is_checkpoint(aligned.start() - 1));
        }
    }
}
