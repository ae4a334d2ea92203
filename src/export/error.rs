//! Export errors.

use std::path::PathBuf;

/// Errors that can occur while writing records out.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet {path} has an unexpected header: {found:?}")]
    HeaderMismatch { path: PathBuf, found: Vec<String> },

    #[error("Sheet backend '{backend}' failed: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}
