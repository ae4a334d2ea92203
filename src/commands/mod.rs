//! Subcommand handlers

pub mod add;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod list;
pub mod reset;
pub mod scrape;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use instamon::{Config, Session, SessionStore};

/// Resolved configuration shared by every handler.
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Context {
    /// Loads the config from `explicit`, or from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Config::config_path()?,
        };
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn session_store(&self) -> Result<SessionStore> {
        Ok(SessionStore::new(self.config.session_path()?))
    }

    /// Loads the session together with the store it came from.
    pub fn load_session(&self) -> Result<(SessionStore, Session)> {
        let store = self.session_store()?;
        let session = store.load()?;
        Ok((store, session))
    }
}

/// Reads a whole input file, or standard input for `None` / `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                eprintln!("Paste rows, then press Ctrl-D to finish:");
            }
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}

/// "1 post" / "3 posts".
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
