use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{GenerationError, Result};

/// Validated configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the dsdgen binary.
    pub dsdgen_path: PathBuf,
    /// Path to the dsdgen distribution definitions (tpcds.idx).
    pub distributions_path: PathBuf,
    /// Scale factor in gigabytes.
    pub scale: u32,
    /// Partitions per parallelizable table.
    pub parallelism: u32,
    /// Single-character field delimiter passed to the generator.
    pub delimiter: char,
    /// Root under which per-task scratch directories are created.
    pub scratch_root: PathBuf,
}

impl RunConfig {
    /// Fail-fast validation, before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.parallelism == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "parallelism must be at least 1".to_string(),
            ));
        }
        if self.scale == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "scale factor must be at least 1".to_string(),
            ));
        }
        if !self.delimiter.is_ascii() {
            return Err(GenerationError::InvalidConfiguration(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        if !self.dsdgen_path.is_file() {
            return Err(GenerationError::InvalidConfiguration(format!(
                "generator binary not found at '{}'",
                self.dsdgen_path.display()
            )));
        }
        if !self.distributions_path.is_file() {
            return Err(GenerationError::InvalidConfiguration(format!(
                "distributions file not found at '{}'",
                self.distributions_path.display()
            )));
        }
        Ok(())
    }
}

/// Terminal state of one logical table within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableStatus {
    /// The merged stream was persisted.
    Written { rows: u64, bytes: u64 },
    /// The merged stream was empty; no dataset was written.
    SkippedEmpty,
    /// Generation or the sink write failed; no partial data was written.
    Failed { error: String },
}

/// Outcome of one logical table (parents and children each get one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutcome {
    pub table: String,
    #[serde(flatten)]
    pub status: TableStatus,
}

/// Summary of a full generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub tables: Vec<TableOutcome>,
    pub duration_ms: u64,
}

impl RunReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            tables: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record(&mut self, table: &str, status: TableStatus) {
        self.tables.push(TableOutcome {
            table: table.to_string(),
            status,
        });
    }

    /// Whether any table failed; the run's exit status derives from this.
    pub fn has_failures(&self) -> bool {
        self.tables
            .iter()
            .any(|outcome| matches!(outcome.status, TableStatus::Failed { .. }))
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}
