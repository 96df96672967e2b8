use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One partition's generator invocation, fully specified up front.
///
/// Constructed fresh per invocation and owned by exactly one worker; no
/// state is shared between concurrent partitions.
#[derive(Debug, Clone)]
pub struct GenerationTask {
    pub table: String,
    /// Partition identifier, 1-based per the dsdgen CLI contract.
    pub partition: u32,
    pub total_partitions: u32,
    pub scale: u32,
    pub delimiter: char,
    pub dsdgen_path: PathBuf,
    pub distributions_path: PathBuf,
}

impl GenerationTask {
    /// Whether this task runs in whole-table mode rather than as one child
    /// of a parallel pass.
    pub fn is_sequential(&self) -> bool {
        self.total_partitions == 1
    }

    /// Name of the file dsdgen writes for this invocation, relative to the
    /// destination directory.
    pub fn output_file_name(&self) -> String {
        if self.is_sequential() {
            format!("{}.dat", self.table)
        } else {
            format!(
                "{}_{}_{}.dat",
                self.table, self.partition, self.total_partitions
            )
        }
    }

    /// Argument list for the dsdgen invocation writing into `out_dir`.
    pub fn args(&self, out_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-TABLE".into(),
            self.table.clone().into(),
            "-SCALE".into(),
            self.scale.to_string().into(),
        ];
        if !self.is_sequential() {
            args.push("-PARALLEL".into());
            args.push(self.total_partitions.to_string().into());
            args.push("-CHILD".into());
            args.push(self.partition.to_string().into());
        }
        args.extend([
            "-DISTRIBUTIONS".into(),
            self.distributions_path.clone().into(),
            "-DELIMITER".into(),
            self.delimiter.to_string().into(),
            "-DIR".into(),
            out_dir.to_path_buf().into(),
            "-FORCE".into(),
            "Y".into(),
            "-TERMINATE".into(),
            "N".into(),
        ]);
        args
    }
}
