//! Generation orchestration for tpcgen.
//!
//! This crate drives the external dsdgen row-generator: it fans each
//! table out across partition tasks, runs each task in an isolated
//! scratch directory, parses the produced files into rows, merges the
//! partitions per logical table, and hands the merged stream to a sink.

pub mod errors;
pub mod invoker;
pub mod model;
pub mod orchestrator;
pub mod scratch;
pub mod task;

pub use errors::GenerationError;
pub use invoker::generate_partition;
pub use model::{RunConfig, RunReport, TableOutcome, TableStatus};
pub use orchestrator::Orchestrator;
pub use scratch::ScratchWorkspace;
pub use task::GenerationTask;
