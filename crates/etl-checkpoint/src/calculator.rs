//! Checkpoint boundaries at or around a ledger.

use etl_types::{LedgerSeq, CHECKPOINT_FREQUENCY};

use crate::error::{CheckpointError, CheckpointResult};

/// Distance of `seq` past the previous checkpoint, `(seq + 1) % 64`.
///
/// Zero means `seq` is itself a checkpoint. Widened to `u64` so that
/// `u32::MAX`, the last representable checkpoint, does not overflow.
fn remainder(seq: LedgerSeq) -> u32 {
    ((u64::from(seq) + 1) % u64::from(CHECKPOINT_FREQUENCY)) as u32
}

/// Returns `true` if a checkpoint is published at `seq`.
pub fn is_checkpoint(seq: LedgerSeq) -> bool {
    remainder(seq) == 0
}

/// The smallest checkpoint at or after `seq`.
///
/// `max_seq` is the highest ledger known to exist (usually the network
/// head). A boundary past it has not been published yet and is reported as
/// [`CheckpointError::OutOfRange`].
pub fn next_checkpoint(seq: LedgerSeq, max_seq: LedgerSeq) -> CheckpointResult<LedgerSeq> {
    let rem = remainder(seq);
    // u32::MAX is a checkpoint, so this never passes it.
    let checkpoint = if rem == 0 {
        seq
    } else {
        seq + (CHECKPOINT_FREQUENCY - rem)
    };

    if checkpoint > max_seq {
        return Err(CheckpointError::OutOfRange {
            checkpoint,
            max_seq,
        });
    }
    Ok(checkpoint)
}

/// The largest checkpoint at or before `seq`.
///
/// Ledgers 0 through 62 precede the first checkpoint. For them the result
/// is the pre-genesis boundary `-1`, which wraps to `u32::MAX`; use
/// [`checked_most_recent_checkpoint`] to get `None` instead.
pub fn most_recent_checkpoint(seq: LedgerSeq) -> LedgerSeq {
    let rem = remainder(seq);
    if rem == 0 {
        seq
    } else {
        seq.wrapping_sub(rem)
    }
}

/// Like [`most_recent_checkpoint`], but `None` when no checkpoint has been
/// published at or before `seq`.
pub fn checked_most_recent_checkpoint(seq: LedgerSeq) -> Option<LedgerSeq> {
    let rem = remainder(seq);
    if rem == 0 {
        Some(seq)
    } else {
        seq.checked_sub(rem)
    }
}
