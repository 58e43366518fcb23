use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use etl_checkpoint::{CheckpointError, LedgerRange, DEFAULT_BATCH_SIZE};
use etl_types::{LedgerEntryType, LedgerSeq, GENESIS_LEDGER};

use crate::error::ConfigError;

/// Settings for one ledger entry change export.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```toml
/// end_ledger = 200000
/// batch_size = 128
/// export_accounts = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// First ledger of the export, inclusive.
    pub start_ledger: LedgerSeq,
    /// Last ledger of the export, inclusive. Must be set.
    pub end_ledger: LedgerSeq,
    /// Ledgers per output batch.
    pub batch_size: u32,
    /// Maximum number of entries to export over the whole range, enforced by
    /// [`ExportRun`](crate::ExportRun). Negative means no limit.
    pub limit: i64,
    /// Fail on the first record that cannot be classified instead of skipping it.
    pub strict_export: bool,
    /// Write rows to stdout rather than into `output`.
    pub use_stdout: bool,
    /// Folder receiving the output files.
    pub output: PathBuf,
    pub export_accounts: bool,
    pub export_trustlines: bool,
    pub export_offers: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            start_ledger: GENESIS_LEDGER,
            end_ledger: 0,
            batch_size: DEFAULT_BATCH_SIZE,
            limit: -1,
            strict_export: false,
            use_stdout: false,
            output: PathBuf::from("changes_output"),
            export_accounts: false,
            export_trustlines: false,
            export_offers: false,
        }
    }
}

impl ExportConfig {
    /// Parse a config from TOML text. The result is validated.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            start = config.start_ledger,
            end = config.end_ledger,
            "loaded export config"
        );
        Ok(config)
    }

    /// Check the ledger range and batch size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ledger_range()?;
        if self.batch_size == 0 {
            return Err(CheckpointError::ZeroBatchSize.into());
        }
        Ok(())
    }

    /// The configured ledgers as a range.
    pub fn ledger_range(&self) -> Result<LedgerRange, ConfigError> {
        Ok(LedgerRange::new(self.start_ledger, self.end_ledger)?)
    }

    /// Entry types selected for export. Selecting none exports all of them.
    pub fn enabled_types(&self) -> Vec<LedgerEntryType> {
        let selected: Vec<LedgerEntryType> = LedgerEntryType::ALL
            .into_iter()
            .filter(|t| match t {
                LedgerEntryType::Account => self.export_accounts,
                LedgerEntryType::Trustline => self.export_trustlines,
                LedgerEntryType::Offer => self.export_offers,
            })
            .collect();

        if selected.is_empty() {
            LedgerEntryType::ALL.to_vec()
        } else {
            selected
        }
    }

    /// The entry limit, or `None` when unlimited.
    pub fn max_objects(&self) -> Option<usize> {
        usize::try_from(self.limit).ok()
    }
}
