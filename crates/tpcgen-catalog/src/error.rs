use thiserror::Error;

/// Errors from catalog construction and partition planning.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A run parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The catalog definition violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience alias for results returned by catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
