//! Spreadsheet push.
//!
//! The reporting sheet uses a fixed five-column layout: caption, date, a
//! blank spacer column, link and submitter. Every row has all five cells,
//! the submitter cell left empty when a record has none. The header row is
//! written once, the first time anything is pushed to an empty sheet.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::export::ExportError;
use crate::ingest::Record;

/// Header row of the reporting sheet.
pub const SHEET_HEADER: [&str; 5] = ["Caption", "Tanggal", "", "Link", "Penginput"];

/// A destination that stores rows like a spreadsheet.
pub trait SheetBackend {
    /// Short name for logs and error messages.
    fn name(&self) -> &'static str;

    /// The current first row, or `None` for an empty sheet.
    fn header(&mut self) -> Result<Option<Vec<String>>, ExportError>;

    /// Writes the header row into an empty sheet.
    fn write_header(&mut self, header: &[String]) -> Result<(), ExportError>;

    /// Appends rows after the existing content.
    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<(), ExportError>;
}

/// Maps a record to its sheet row.
pub fn sheet_row(record: &Record) -> Vec<String> {
    vec![
        record.caption.clone(),
        record.date.clone(),
        String::new(),
        record.link.clone(),
        record.submitter_or_empty().to_string(),
    ]
}

fn header_row() -> Vec<String> {
    SHEET_HEADER.iter().map(|s| s.to_string()).collect()
}

/// Pushes records into a [`SheetBackend`].
pub struct SheetExporter<B: SheetBackend> {
    backend: B,
}

impl<B: SheetBackend> SheetExporter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Appends one row per record, in order. Returns the number of rows written.
    ///
    /// Records are only read; the caller's slice is never reordered.
    pub fn push(&mut self, records: &[Record]) -> Result<usize, ExportError> {
        if records.is_empty() {
            debug!(backend = self.backend.name(), "nothing to push");
            return Ok(0);
        }

        if self.backend.header()?.is_none() {
            info!(backend = self.backend.name(), "writing sheet header");
            self.backend.write_header(&header_row())?;
        }

        let rows: Vec<Vec<String>> = records.iter().map(sheet_row).collect();
        self.backend.append_rows(&rows)?;

        info!(backend = self.backend.name(), rows = rows.len(), "pushed rows");
        Ok(rows.len())
    }
}

/// In-memory sheet, used for dry runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySheet {
    rows: Vec<Vec<String>>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl SheetBackend for MemorySheet {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn header(&mut self) -> Result<Option<Vec<String>>, ExportError> {
        Ok(self.rows.first().cloned())
    }

    fn write_header(&mut self, header: &[String]) -> Result<(), ExportError> {
        self.rows.insert(0, header.to_vec());
        Ok(())
    }

    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<(), ExportError> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }
}

/// Local CSV file mirroring the reporting sheet (append-only).
#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn writer(&self) -> Result<::csv::Writer<fs::File>, ExportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        Ok(::csv::WriterBuilder::new().flexible(true).from_writer(file))
    }
}

impl SheetBackend for CsvSheet {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn header(&mut self) -> Result<Option<Vec<String>>, ExportError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let Some(first) = reader.records().next() else {
            return Ok(None);
        };
        let header: Vec<String> = first?.iter().map(str::to_string).collect();
        if header.first().map(String::as_str) != Some(SHEET_HEADER[0]) {
            return Err(ExportError::HeaderMismatch {
                path: self.path.clone(),
                found: header,
            });
        }
        Ok(Some(header))
    }

    fn write_header(&mut self, header: &[String]) -> Result<(), ExportError> {
        let mut out = self.writer()?;
        out.write_record(header)?;
        out.flush()?;
        Ok(())
    }

    fn append_rows(&mut self, rows: &[Vec<String>]) -> Result<(), ExportError> {
        let mut out = self.writer()?;
        for row in rows {
            out.write_record(row)?;
        }
        out.flush()?;
        Ok(())
    }
}
