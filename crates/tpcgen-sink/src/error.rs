use std::path::PathBuf;

use thiserror::Error;

/// Errors from sink construction and table writes.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The requested output format has no writer in this build.
    #[error("unsupported sink format: {0}")]
    UnsupportedFormat(String),
    /// The field delimiter cannot be used by the delimited writer.
    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
    /// The table destination already exists and the write mode forbids it.
    #[error("destination '{0}' already exists")]
    DestinationExists(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Convenience alias for results returned by sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
