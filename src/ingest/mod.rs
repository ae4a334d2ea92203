//! CSV row ingestion.
//!
//! Turns pasted or uploaded `link,caption,timestamp` text into normalized
//! [`Record`]s, deduplicating by link against the caller's running set.
//!
//! Two policies are offered:
//! - [`ingest`] keeps the established behavior: short rows are dropped
//!   silently, duplicate or empty links are counted, and a single bad
//!   timestamp aborts the whole call.
//! - [`ingest_rows`] reports an outcome per row and never aborts.

mod error;
mod record;
pub mod timestamp;

use std::collections::HashSet;

use tracing::{debug, info};

pub use error::IngestError;
pub use record::{has_submitters, Record};

use crate::caption;

/// Number of columns a row needs: link, caption, timestamp.
pub const MIN_COLUMNS: usize = 3;

/// Records accepted by one ingestion call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Accepted records in input order
    pub records: Vec<Record>,
    /// Rows dropped because their link was empty or already seen
    pub skipped: usize,
}

impl Batch {
    /// Links of the accepted records, in order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.link.as_str())
    }
}

/// Options shared by both ingestion policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions<'a> {
    /// Name recorded on every accepted record
    pub submitter: Option<&'a str>,
    /// Treat the first CSV row as a header and skip it
    pub has_header: bool,
}

impl<'a> IngestOptions<'a> {
    pub fn with_submitter(submitter: Option<&'a str>) -> Self {
        Self {
            submitter,
            ..Self::default()
        }
    }
}

/// Why a row was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyLink,
    Duplicate,
}

/// Outcome of one CSV row under the per-row policy.
#[derive(Debug)]
pub enum RowOutcome {
    /// Row became a record
    Accepted(Record),
    /// Link was empty or already seen
    Skipped { line: u64, reason: SkipReason },
    /// Row had fewer than [`MIN_COLUMNS`] columns
    Malformed { line: u64, columns: usize },
    /// Row could not be converted (bad timestamp)
    Invalid(IngestError),
}

impl RowOutcome {
    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Accepted(record) => Some(record),
            _ => None,
        }
    }
}

/// Tally of a per-row ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub malformed: usize,
    pub invalid: usize,
}

impl RowSummary {
    pub fn from_outcomes(outcomes: &[RowOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                RowOutcome::Accepted(_) => summary.accepted += 1,
                RowOutcome::Skipped { .. } => summary.skipped += 1,
                RowOutcome::Malformed { .. } => summary.malformed += 1,
                RowOutcome::Invalid(_) => summary.invalid += 1,
            }
        }
        summary
    }
}

/// Ingests CSV text, aborting on the first unparsable timestamp.
///
/// `existing_links` is only extended with the accepted links when the whole
/// call succeeds; on error it is left exactly as it was.
pub fn ingest(
    csv_text: &str,
    existing_links: &mut HashSet<String>,
    options: IngestOptions<'_>,
) -> Result<Batch, IngestError> {
    let mut batch = Batch::default();
    let mut accepted: HashSet<String> = HashSet::new();

    for row in read_rows(csv_text, options.has_header) {
        let (line, fields) = row?;
        match classify(&fields, line, existing_links, &accepted) {
            Classified::Malformed => {
                debug!(line, columns = fields.len(), "dropping short row");
            }
            Classified::Skip(reason) => {
                debug!(line, ?reason, "skipping row");
                batch.skipped += 1;
            }
            Classified::Take(link) => {
                let record = build_record(&fields, line, &link, options.submitter)?;
                accepted.insert(link);
                batch.records.push(record);
            }
        }
    }

    existing_links.extend(accepted);
    info!(
        accepted = batch.records.len(),
        skipped = batch.skipped,
        "ingested batch"
    );
    Ok(batch)
}

/// Ingests CSV text reporting one [`RowOutcome`] per row.
///
/// Accepted links are added to `existing_links` as they are accepted; a row
/// with a bad timestamp does not claim its link, so a corrected resubmission
/// is not treated as a duplicate.
pub fn ingest_rows(
    csv_text: &str,
    existing_links: &mut HashSet<String>,
    options: IngestOptions<'_>,
) -> Vec<RowOutcome> {
    let empty = HashSet::new();
    let mut outcomes = Vec::new();

    for row in read_rows(csv_text, options.has_header) {
        let (line, fields) = match row {
            Ok(row) => row,
            Err(e) => {
                outcomes.push(RowOutcome::Invalid(e));
                continue;
            }
        };

        let outcome = match classify(&fields, line, existing_links, &empty) {
            Classified::Malformed => RowOutcome::Malformed {
                line,
                columns: fields.len(),
            },
            Classified::Skip(reason) => RowOutcome::Skipped { line, reason },
            Classified::Take(link) => {
                match build_record(&fields, line, &link, options.submitter) {
                    Ok(record) => {
                        existing_links.insert(link);
                        RowOutcome::Accepted(record)
                    }
                    Err(e) => RowOutcome::Invalid(e),
                }
            }
        };
        outcomes.push(outcome);
    }

    let summary = RowSummary::from_outcomes(&outcomes);
    info!(?summary, "ingested rows");
    outcomes
}

enum Classified {
    Malformed,
    Skip(SkipReason),
    Take(String),
}

fn classify(
    fields: &csv::StringRecord,
    line: u64,
    existing: &HashSet<String>,
    accepted: &HashSet<String>,
) -> Classified {
    if fields.len() < MIN_COLUMNS {
        return Classified::Malformed;
    }
    let link = fields.get(0).unwrap_or_default().trim();
    if link.is_empty() {
        return Classified::Skip(SkipReason::EmptyLink);
    }
    if existing.contains(link) || accepted.contains(link) {
        debug!(line, link, "duplicate link");
        return Classified::Skip(SkipReason::Duplicate);
    }
    Classified::Take(link.to_string())
}

fn build_record(
    fields: &csv::StringRecord,
    line: u64,
    link: &str,
    submitter: Option<&str>,
) -> Result<Record, IngestError> {
    let raw_timestamp = fields.get(2).unwrap_or_default();
    let date = timestamp::to_record_date(raw_timestamp).ok_or_else(|| IngestError::Timestamp {
        line,
        value: raw_timestamp.trim().to_string(),
    })?;
    let caption = caption::normalize(fields.get(1).unwrap_or_default());
    Ok(Record::new(link, caption, date, submitter))
}

/// Iterates CSV rows with their 1-based starting line numbers.
fn read_rows(
    csv_text: &str,
    has_header: bool,
) -> impl Iterator<Item = Result<(u64, csv::StringRecord), IngestError>> + '_ {
    let reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    reader.into_records().map(|row| {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        Ok((line, row))
    })
}
