use chrono::{DateTime, Utc};

use etl_types::{LedgerCloseMeta, LedgerCloseMetaV0, LedgerSeq};

use crate::error::{MetaError, MetaResult};

/// Convert a raw close time (seconds since the UNIX epoch) to UTC.
///
/// Second resolution only; the nanosecond component is always zero.
pub fn time_point_to_utc(raw: i64) -> MetaResult<DateTime<Utc>> {
    if raw < 0 {
        return Err(MetaError::InvalidTimestamp(raw));
    }
    DateTime::from_timestamp(raw, 0).ok_or(MetaError::InvalidTimestamp(raw))
}

/// The close time of `ledger` in UTC.
pub fn extract_close_time(ledger: &LedgerCloseMeta) -> MetaResult<DateTime<Utc>> {
    let v0 = require_v0(ledger)?;
    time_point_to_utc(v0.header.close_time)
}

/// The sequence number recorded in the header of `ledger`.
pub fn extract_ledger_sequence(ledger: &LedgerCloseMeta) -> MetaResult<LedgerSeq> {
    Ok(require_v0(ledger)?.header.ledger_seq)
}

fn require_v0(ledger: &LedgerCloseMeta) -> MetaResult<&LedgerCloseMetaV0> {
    ledger.as_v0().ok_or(MetaError::UnsupportedLedgerFormat {
        version: ledger.version(),
    })
}
