//! The normalized post record.

use serde::{Deserialize, Serialize};

/// One normalized Instagram post entry.
///
/// Built only by the ingestion and scrape pipelines; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Post URL, the dedup key
    pub link: String,
    /// First sentence of the caption, printable ASCII only
    pub caption: String,
    /// Post date as `MM-DD-YYYY`
    pub date: String,
    /// Who entered the data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,
}

impl Record {
    pub fn new(
        link: impl Into<String>,
        caption: impl Into<String>,
        date: impl Into<String>,
        submitter: Option<&str>,
    ) -> Self {
        Self {
            link: link.into(),
            caption: caption.into(),
            date: date.into(),
            submitter: submitter.map(str::to_string),
        }
    }

    /// Submitter name, or the empty string when none was recorded.
    pub fn submitter_or_empty(&self) -> &str {
        self.submitter.as_deref().unwrap_or("")
    }
}

/// Whether any record in the slice carries a submitter.
pub fn has_submitters(records: &[Record]) -> bool {
    records.iter().any(|r| r.submitter.is_some())
}
