use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use tpcgen_catalog::{plan_partitions, Catalog, TableSpec};
use tpcgen_sink::{Row, SinkWriter};

use crate::errors::Result;
use crate::invoker::generate_partition;
use crate::model::{RunConfig, RunReport, TableStatus};
use crate::task::GenerationTask;

/// Drives a full generation run: catalog iteration, partition fan-out,
/// per-table merge, and sink dispatch.
///
/// Tables are processed one at a time in catalog order; partitions within
/// a table run concurrently. One table's failure is recorded and the run
/// proceeds to its siblings.
#[derive(Debug)]
pub struct Orchestrator {
    config: RunConfig,
}

impl Orchestrator {
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub async fn run(&self, catalog: &Catalog, sink: &dyn SinkWriter) -> RunReport {
        let start = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        let mut report = RunReport::new(run_id.clone());

        info!(
            run_id = %run_id,
            tables = catalog.top_level().count(),
            scale = self.config.scale,
            parallelism = self.config.parallelism,
            "generation run started"
        );

        for table in catalog.top_level() {
            let mut targets = vec![table];
            if let Some(child) = catalog.child_of(&table.name)
                && let Some(child_spec) = catalog.get(child)
            {
                targets.push(child_spec);
            }

            match self.merge_table(table).await {
                Ok(rows) => {
                    for target in targets {
                        report.record(&target.name, write_target(sink, target, &rows));
                    }
                }
                Err(err) => {
                    // No partial data may reach the sink; both the parent
                    // and its paired child go unwritten.
                    warn!(table = %table.name, error = %err, "table generation failed");
                    for target in targets {
                        report.record(
                            &target.name,
                            TableStatus::Failed {
                                error: err.to_string(),
                            },
                        );
                    }
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            failed = report.has_failures(),
            "generation run finished"
        );
        report
    }

    /// Fan one table out across its planned partitions and concatenate
    /// their rows. Partition order in the merge is completion order; no
    /// cross-partition ordering is guaranteed.
    async fn merge_table(&self, table: &TableSpec) -> Result<Vec<Row>> {
        let partitions = plan_partitions(table, self.config.parallelism)?;
        info!(
            table = %table.name,
            partitions,
            mode = if partitions == 1 { "sequential" } else { "parallel" },
            "generating table"
        );

        let mut tasks = JoinSet::new();
        for partition in 1..=partitions {
            let task = GenerationTask {
                table: table.name.clone(),
                partition,
                total_partitions: partitions,
                scale: self.config.scale,
                delimiter: self.config.delimiter,
                dsdgen_path: self.config.dsdgen_path.clone(),
                distributions_path: self.config.distributions_path.clone(),
            };
            let scratch_root = self.config.scratch_root.clone();
            tasks.spawn_blocking(move || generate_partition(&task, &scratch_root));
        }

        // Every issued sibling must be awaited before deciding the table's
        // fate; a partial merge would be silently incomplete.
        let mut rows: Vec<Row> = Vec::new();
        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            match joined? {
                Ok(partition_rows) => rows.extend(partition_rows),
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    } else {
                        warn!(table = %table.name, error = %err, "additional partition failure");
                    }
                }
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        Ok(rows)
    }
}

/// Independent write of one merged stream under one logical table name;
/// failure here does not roll back sibling writes.
fn write_target(sink: &dyn SinkWriter, target: &TableSpec, rows: &[Row]) -> TableStatus {
    if rows.is_empty() {
        info!(table = %target.name, "merged stream is empty, skipping write");
        return TableStatus::SkippedEmpty;
    }
    match sink.write_table(target, rows) {
        Ok(bytes) => {
            info!(table = %target.name, rows = rows.len(), bytes, "table written");
            TableStatus::Written {
                rows: rows.len() as u64,
                bytes,
            }
        }
        Err(err) => {
            warn!(table = %target.name, error = %err, "sink write failed");
            TableStatus::Failed {
                error: err.to_string(),
            }
        }
    }
}
