//! Ingestion errors.

/// Errors that abort an ingestion call.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid timestamp '{value}' on line {line} (expected ISO-8601)")]
    Timestamp { line: u64, value: String },

    #[error("Failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}
