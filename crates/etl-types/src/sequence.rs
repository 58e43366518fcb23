/// A ledger sequence number.
///
/// Sequences are gapless and start at [`GENESIS_LEDGER`]; there is no ledger 0.
pub type LedgerSeq = u32;

/// The first ledger of every network.
pub const GENESIS_LEDGER: LedgerSeq = 1;

/// Number of ledgers between two history archive checkpoints.
///
/// A checkpoint is published when `(seq + 1) % CHECKPOINT_FREQUENCY == 0`,
/// so the boundaries are 63, 127, 191, ...
pub const CHECKPOINT_FREQUENCY: u32 = 64;
