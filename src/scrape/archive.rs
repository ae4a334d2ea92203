//! Post source backed by a JSON archive of captured posts.
//!
//! The archive is a JSON array of objects:
//!
//! ```json
//! [{ "shortcode": "Cxyz123", "caption": "Hello.", "timestamp": "2024-01-01T10:00:00Z" }]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::{Post, PostSource, ScrapeError};

#[derive(Debug, Deserialize)]
struct ArchivedPost {
    shortcode: String,
    #[serde(default)]
    caption: Option<String>,
    timestamp: String,
}

/// Posts loaded from an archive file, keyed by shortcode.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSource {
    posts: HashMap<String, Post>,
}

impl ArchiveSource {
    /// Parses archive JSON. Later entries win on repeated shortcodes.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ArchivedPost> =
            serde_json::from_str(json).context("Archive is not a JSON array of posts")?;
        let posts = entries
            .into_iter()
            .map(|p| {
                (
                    p.shortcode,
                    Post {
                        caption: p.caption,
                        taken_at: p.timestamp,
                    },
                )
            })
            .collect();
        Ok(Self { posts })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read archive {}", path.display()))?;
        let source = Self::from_json(&json)
            .with_context(|| format!("Failed to parse archive {}", path.display()))?;
        info!(path = %path.display(), posts = source.len(), "loaded archive");
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostSource for ArchiveSource {
    fn name(&self) -> &'static str {
        "archive"
    }

    fn fetch(&self, shortcode: &str) -> Result<Post, ScrapeError> {
        self.posts
            .get(shortcode)
            .cloned()
            .ok_or_else(|| ScrapeError::NotFound(shortcode.to_string()))
    }
}
