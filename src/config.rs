//! Configuration file handling.
//!
//! The config lives at `<config dir>/instamon/config.toml` unless overridden
//! by `--config` or `INSTAMON_CONFIG`. Every field has a default, so a missing
//! file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "INSTAMON_CONFIG";

const APP_DIR: &str = "instamon";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub ingest: IngestConfig,
    pub sheet: SheetConfig,
    pub dashboard: DashboardConfig,
}

/// Where the accumulated records are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file (default: `<data dir>/instamon/session.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Defaults for `add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Name recorded on every ingested record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter: Option<String>,
    /// Skip the first row of every input
    pub has_header: bool,
    /// Report bad rows instead of rejecting the whole input
    pub keep_going: bool,
}

/// Local mirror of the reporting sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Sheet file (default: `<data dir>/instamon/sheet.csv`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Embedded monitoring dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Embed URL; empty means no dashboard is linked
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            width: 1200,
            height: 650,
        }
    }
}

impl DashboardConfig {
    pub fn is_linked(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// HTML iframe snippet for embedding the dashboard.
    pub fn iframe(&self) -> String {
        format!(
            r#"<iframe src="{}" width="{}" height="{}" scrolling="yes"></iframe>"#,
            self.url.trim(),
            self.width,
            self.height
        )
    }
}

impl Config {
    /// Default config file location, honoring `INSTAMON_CONFIG`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Resolved session file path.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session.path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("session.json")),
        }
    }

    /// Resolved sheet file path.
    pub fn sheet_path(&self) -> Result<PathBuf> {
        match &self.sheet.path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("sheet.csv")),
        }
    }
}

fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().context("Could not determine data directory")?;
    Ok(dir.join(APP_DIR))
}
