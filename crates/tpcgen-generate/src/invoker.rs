use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Command;

use encoding_rs::WINDOWS_1252;
use tpcgen_sink::Row;
use tracing::{debug, warn};

use crate::errors::{GenerationError, Result};
use crate::scratch::ScratchWorkspace;
use crate::task::GenerationTask;

/// Run one partition of one table through the external generator and
/// parse its output file into rows.
///
/// Blocks until the generator exits. The scratch directory is removed on
/// every exit path, including generator failure and read errors.
pub fn generate_partition(task: &GenerationTask, scratch_root: &Path) -> Result<Vec<Row>> {
    let scratch = ScratchWorkspace::create(scratch_root)?;

    debug!(
        table = %task.table,
        partition = task.partition,
        total = task.total_partitions,
        scratch = %scratch.path().display(),
        "running generator"
    );
    let output = Command::new(&task.dsdgen_path)
        .args(task.args(scratch.path()))
        .output()?;

    if !output.status.success() {
        return Err(GenerationError::GeneratorFailed {
            table: task.table.clone(),
            partition: task.partition,
            total: task.total_partitions,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let data_file = scratch.path().join(task.output_file_name());
    if !data_file.is_file() {
        // dsdgen legitimately emits nothing for some scale/partition
        // combinations; an absent file after a clean exit is an empty
        // partition, not an error.
        warn!(
            table = %task.table,
            partition = task.partition,
            file = %data_file.display(),
            "generator produced no output file, treating partition as empty"
        );
        return Ok(Vec::new());
    }

    read_rows(&data_file, task.delimiter)
}

/// Parse one generator output file. dsdgen writes Windows-1252, one record
/// per line, every record terminated by a trailing field delimiter. Lines
/// with undecodable bytes are skipped with a warning; they never abort the
/// stream.
fn read_rows(path: &Path, delimiter: char) -> Result<Vec<Row>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
            buf.pop();
        }
        if buf.is_empty() {
            continue;
        }

        let (decoded, _, malformed) = WINDOWS_1252.decode(&buf);
        if malformed {
            warn!(
                file = %path.display(),
                line = line_number,
                "skipping line with undecodable bytes"
            );
            continue;
        }
        rows.push(split_fields(&decoded, delimiter));
    }

    debug!(file = %path.display(), rows = rows.len(), "parsed partition file");
    Ok(rows)
}

fn split_fields(line: &str, delimiter: char) -> Row {
    // Strip the record-terminating delimiter so field count matches the
    // table's column count.
    let line = line.strip_suffix(delimiter).unwrap_or(line);
    line.split(delimiter).map(str::to_string).collect()
}
