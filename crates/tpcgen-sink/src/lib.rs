//! Storage sinks for merged table streams.
//!
//! A sink receives one logical table's merged rows and persists them under
//! the table's own destination directory. The format set is closed; the
//! transactional-table format is recognized but requires a catalog service
//! this build does not carry, and is rejected at configuration time.

pub mod columnar;
pub mod delimited;
pub mod error;
pub mod format;

use std::path::Path;

use tpcgen_catalog::TableSpec;

pub use columnar::ParquetSink;
pub use delimited::DelimitedTextSink;
pub use error::SinkError;
pub use format::{SinkFormat, WriteMode};

/// One parsed generator row: an ordered sequence of string fields.
pub type Row = Vec<String>;

/// Durable persistence for one merged table stream.
///
/// Writes for distinct tables land under disjoint directories, so a sink
/// may be shared across tables; concurrent writes to the same table are
/// not supported.
pub trait SinkWriter: Send + Sync + std::fmt::Debug {
    /// Persist `rows` under `table`'s destination; returns bytes written.
    fn write_table(&self, table: &TableSpec, rows: &[Row]) -> error::Result<u64>;
}

/// Construct the sink for a run. Fails fast on formats without a writer,
/// before any generation work starts.
pub fn build_sink(
    format: SinkFormat,
    root: &Path,
    delimiter: char,
    mode: WriteMode,
) -> error::Result<Box<dyn SinkWriter>> {
    match format {
        SinkFormat::Parquet => Ok(Box::new(ParquetSink::new(root.to_path_buf(), mode))),
        SinkFormat::Csv => {
            if !delimiter.is_ascii() {
                return Err(SinkError::InvalidDelimiter(delimiter));
            }
            Ok(Box::new(DelimitedTextSink::new(
                root.to_path_buf(),
                delimiter as u8,
                mode,
            )))
        }
        SinkFormat::Iceberg => Err(SinkError::UnsupportedFormat(
            "iceberg output requires a configured table catalog".to_string(),
        )),
    }
}
