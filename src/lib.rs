//! InstaMon library
//!
//! Collects Instagram post metadata (link, caption, timestamp), normalizes
//! captions, deduplicates by link, and exports the result as CSV or into a
//! reporting sheet.
//!
//! # Module Structure
//!
//! - [`caption`] - Caption normalization
//! - [`ingest`] - CSV row ingestion and the [`Record`] type
//! - [`session`] - Accumulated records and their on-disk store
//! - [`scrape`] - Link-driven collection from a post source
//! - [`export`] - CSV download and sheet push
//! - [`table`] / [`tui`] - Terminal presentation

pub mod caption;
pub mod cli;
pub mod config;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod scrape;
pub mod session;
pub mod table;
pub mod theme;
pub mod tui;

pub use config::Config;
pub use ingest::{ingest, ingest_rows, Batch, IngestError, IngestOptions, Record, RowOutcome};
pub use session::{Session, SessionStore};
