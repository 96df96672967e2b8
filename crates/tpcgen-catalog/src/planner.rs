use crate::error::{CatalogError, Result};
use crate::table::TableSpec;

/// Decide how many partitions a table's generation pass is split into.
///
/// Non-parallelizable tables always plan to a single sequential partition
/// regardless of the requested parallelism. The plan is deterministic, so
/// partition identifiers are reproducible across retries.
pub fn plan_partitions(table: &TableSpec, requested_parallelism: u32) -> Result<u32> {
    if requested_parallelism == 0 {
        return Err(CatalogError::InvalidConfiguration(
            "requested parallelism must be at least 1".to_string(),
        ));
    }
    if !table.parallelizable {
        return Ok(1);
    }
    Ok(requested_parallelism)
}
