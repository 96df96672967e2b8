use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, SinkError};

/// Output format for merged table streams. Closed set; unknown
/// identifiers are rejected before any generation work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFormat {
    /// Columnar file output (Parquet).
    Parquet,
    /// Row file output with a configurable field delimiter.
    Csv,
    /// Transactional table output (Iceberg).
    Iceberg,
}

impl FromStr for SinkFormat {
    type Err = SinkError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "parquet" => Ok(Self::Parquet),
            "csv" => Ok(Self::Csv),
            "iceberg" => Ok(Self::Iceberg),
            other => Err(SinkError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SinkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parquet => "parquet",
            Self::Csv => "csv",
            Self::Iceberg => "iceberg",
        };
        f.write_str(name)
    }
}

/// Behavior when a table destination already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any previous content for the table.
    #[default]
    Overwrite,
    /// Keep previous content and add a new part file.
    Append,
    /// Refuse to touch an existing destination.
    ErrorIfExists,
}

impl FromStr for WriteMode {
    type Err = SinkError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "overwrite" => Ok(Self::Overwrite),
            "append" => Ok(Self::Append),
            "error-if-exists" => Ok(Self::ErrorIfExists),
            other => Err(SinkError::UnsupportedFormat(format!(
                "unknown write mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Overwrite => "overwrite",
            Self::Append => "append",
            Self::ErrorIfExists => "error-if-exists",
        };
        f.write_str(name)
    }
}

/// Resolve a table's destination directory under `root` and apply the
/// write mode. Returns the part-file path the caller should write to.
pub(crate) fn prepare_destination(
    root: &Path,
    table: &str,
    mode: WriteMode,
    extension: &str,
) -> Result<PathBuf> {
    let dir = root.join(table);
    match mode {
        WriteMode::Overwrite => {
            if dir.exists() {
                fs::remove_dir_all(&dir)?;
            }
        }
        WriteMode::ErrorIfExists => {
            if dir.exists() {
                return Err(SinkError::DestinationExists(dir));
            }
        }
        WriteMode::Append => {}
    }
    fs::create_dir_all(&dir)?;

    let part = match mode {
        // Append parts must never collide with earlier runs.
        WriteMode::Append => format!("part-{}.{extension}", uuid::Uuid::new_v4().simple()),
        _ => format!("part-0.{extension}"),
    };
    Ok(dir.join(part))
}
