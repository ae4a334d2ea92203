//! Getting records out: CSV download and spreadsheet push.

pub mod csv;
mod error;
pub mod sheet;

pub use error::ExportError;
pub use sheet::{CsvSheet, MemorySheet, SheetBackend, SheetExporter};
