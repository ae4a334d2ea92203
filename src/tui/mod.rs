//! TUI (Text User Interface) module
//!
//! Interactive viewer for the accumulated records, built on ratatui/crossterm.

pub mod records_app;

pub use records_app::{KeyResult, RecordsApp};
