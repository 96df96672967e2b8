//! Table catalog and partition planning for tpcgen.
//!
//! This crate holds the pure, I/O-free half of the orchestration core:
//! the closed table catalog with parent/child pairing, and the planner
//! deciding how many partitions each table's generation pass fans out to.

pub mod error;
pub mod planner;
pub mod table;
pub mod tpcds;

pub use error::CatalogError;
pub use planner::plan_partitions;
pub use table::{Catalog, TableSpec};
pub use tpcds::tpcds_catalog;
