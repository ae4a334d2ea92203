//! Link-driven collection of post metadata.
//!
//! A [`PostSource`] knows how to look up a post by shortcode. The pipeline in
//! [`scrape_links`] turns a list of links into one outcome per link, so a
//! failed lookup is an ordinary value rather than an aborted run.

mod archive;
mod shortcode;

use std::collections::HashSet;

use tracing::{debug, warn};

pub use archive::ArchiveSource;
pub use shortcode::shortcode;

use crate::caption;
use crate::ingest::{timestamp, Record};

/// Raw metadata of one post, as a source returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub caption: Option<String>,
    /// ISO-8601 timestamp of the post
    pub taken_at: String,
}

/// Errors for a single link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    #[error("Not a post link: {0}")]
    InvalidLink(String),

    #[error("Already collected: {0}")]
    Duplicate(String),

    #[error("Post {0} not found")]
    NotFound(String),

    #[error("Post {shortcode} has an invalid timestamp '{value}'")]
    Timestamp { shortcode: String, value: String },

    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: &'static str,
        message: String,
    },
}

/// Something that can look up posts by shortcode.
pub trait PostSource {
    /// Short name for logs and error messages.
    fn name(&self) -> &'static str;

    fn fetch(&self, shortcode: &str) -> Result<Post, ScrapeError>;
}

/// Result for one input link, aligned with the input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub link: String,
    pub result: Result<Record, ScrapeError>,
}

/// Success and failure counts of a scrape run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl From<&[LinkOutcome]> for ScrapeSummary {
    fn from(outcomes: &[LinkOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// Splits pasted text into links, one per line, dropping blank lines.
pub fn parse_links(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Looks up every link and builds records from the results.
///
/// Links already in `existing_links` (or repeated within `links`) become
/// [`ScrapeError::Duplicate`]. Successful links are added to `existing_links`.
pub fn scrape_links<S: PostSource + ?Sized>(
    source: &S,
    links: &[String],
    existing_links: &mut HashSet<String>,
    submitter: Option<&str>,
) -> Vec<LinkOutcome> {
    links
        .iter()
        .map(|link| {
            let result = scrape_one(source, link, existing_links, submitter);
            match &result {
                Ok(_) => {
                    existing_links.insert(link.clone());
                    debug!(source = source.name(), %link, "collected post");
                }
                Err(e) => warn!(source = source.name(), %link, error = %e, "failed to collect post"),
            }
            LinkOutcome {
                link: link.clone(),
                result,
            }
        })
        .collect()
}

fn scrape_one<S: PostSource + ?Sized>(
    source: &S,
    link: &str,
    existing_links: &HashSet<String>,
    submitter: Option<&str>,
) -> Result<Record, ScrapeError> {
    if existing_links.contains(link) {
        return Err(ScrapeError::Duplicate(link.to_string()));
    }
    let code = shortcode(link).ok_or_else(|| ScrapeError::InvalidLink(link.to_string()))?;
    let post = source.fetch(&code)?;
    let date = timestamp::to_record_date(&post.taken_at).ok_or_else(|| ScrapeError::Timestamp {
        shortcode: code.clone(),
        value: post.taken_at.clone(),
    })?;
    Ok(Record::new(
        link,
        caption::normalize_opt(post.caption.as_deref()),
        date,
        submitter,
    ))
}
