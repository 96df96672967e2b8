use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tpcgen_catalog::TableSpec;
use tracing::debug;

use crate::error::Result;
use crate::format::{prepare_destination, WriteMode};
use crate::{Row, SinkWriter};

/// Row-file sink writing one delimited text part per table, headerless.
#[derive(Debug)]
pub struct DelimitedTextSink {
    root: PathBuf,
    delimiter: u8,
    mode: WriteMode,
}

impl DelimitedTextSink {
    pub fn new(root: PathBuf, delimiter: u8, mode: WriteMode) -> Self {
        Self {
            root,
            delimiter,
            mode,
        }
    }
}

impl SinkWriter for DelimitedTextSink {
    fn write_table(&self, table: &TableSpec, rows: &[Row]) -> Result<u64> {
        let path = prepare_destination(&self.root, &table.name, self.mode, "csv")?;
        let writer = BufWriter::new(File::create(&path)?);
        let counting = CountingWriter::new(writer);
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(counting);

        for row in rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        let counting = writer.into_inner().map_err(|err| err.into_error())?;
        let bytes = counting.bytes_written();
        debug!(table = %table.name, path = %path.display(), bytes, "wrote delimited part");
        Ok(bytes)
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
