//! Accumulated records and their on-disk store.
//!
//! A [`Session`] is the ordered collection of everything ingested so far,
//! plus the most recent batch (the default target for spreadsheet export).
//! It is an explicit value: callers load it, mutate it, and save it.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ingest::Record;

/// Errors from loading or saving a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize session for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered records plus the last committed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    records: Vec<Record>,
    /// Number of trailing records that came from the last commit
    #[serde(default)]
    last_batch: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records added by the most recent [`commit`](Self::commit).
    pub fn last_batch(&self) -> &[Record] {
        let start = self.records.len().saturating_sub(self.last_batch);
        &self.records[start..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Links already held, for seeding cross-batch dedup.
    pub fn seen_links(&self) -> HashSet<String> {
        self.records.iter().map(|r| r.link.clone()).collect()
    }

    /// Appends a batch and marks it as the last batch.
    ///
    /// An empty batch still resets the last batch to empty.
    pub fn commit(&mut self, records: Vec<Record>) {
        self.last_batch = records.len();
        self.records.extend(records);
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.last_batch = 0;
    }
}

/// JSON file holding a [`Session`] between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the session; a missing file is an empty session.
    pub fn load(&self) -> Result<Session, SessionError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session file, starting empty");
                return Ok(Session::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut session: Session =
            serde_json::from_str(&content).map_err(|source| SessionError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        session.last_batch = session.last_batch.min(session.records.len());
        Ok(session)
    }

    /// Writes the session, replacing the file atomically.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(session).map_err(|source| {
            SessionError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), records = session.len(), "saved session");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
