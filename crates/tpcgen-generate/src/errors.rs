use thiserror::Error;

use tpcgen_catalog::CatalogError;
use tpcgen_sink::SinkError;

/// Errors emitted while planning, invoking the generator, and merging.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A run parameter failed fail-fast validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The generator process exited non-zero for one partition. Terminal
    /// for the affected table; carries both captured streams in full.
    #[error(
        "generator failed for table '{table}' partition {partition}/{total} \
         (exit code {code:?})\nstdout:\n{stdout}\nstderr:\n{stderr}"
    )]
    GeneratorFailed {
        table: String,
        partition: u32,
        total: u32,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("partition task aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience alias for results returned by the generation crates.
pub type Result<T> = std::result::Result<T, GenerationError>;
