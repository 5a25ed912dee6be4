//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::row::STATS_HEADER;
use crate::writer::OutputWriter;
use crate::{OutputResult, StatsRow};

/// Writes one comma-separated line per step.
///
/// Headerless by default, so every line is a data record; use
/// [`with_header`][Self::with_header] for a first line of column names.
pub struct CsvWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }

    /// Create (or truncate) the file at `path` and write the header row.
    pub fn with_header(path: &Path) -> OutputResult<Self> {
        let mut w = Self::create(path)?;
        w.inner.write_record(STATS_HEADER)?;
        Ok(w)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any `Write` sink (a buffer, stdout, …).
    pub fn from_writer(sink: W) -> Self {
        let inner = WriterBuilder::new().has_headers(false).from_writer(sink);
        Self { inner, finished: false }
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &StatsRow) -> OutputResult<()> {
        self.inner.write_record(row.fields().map(|v| v.to_string()))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
