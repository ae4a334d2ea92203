//! Shared helpers for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// An isolated config, session and sheet inside a temp dir.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Sandbox whose config file carries `extra` after the path sections.
    pub fn with_config(extra: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = format!(
            "[session]\npath = '{}'\n\n[sheet]\npath = '{}'\n\n{}",
            dir.path().join("session.json").display(),
            dir.path().join("sheet.csv").display(),
            extra
        );
        fs::write(dir.path().join("config.toml"), config).expect("Failed to write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.path().join("session.json")
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.dir.path().join("sheet.csv")
    }

    /// `instamon` with this sandbox's config and colors disabled.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("instamon").expect("binary should build");
        cmd.env("INSTAMON_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("INSTAMON_LOG");
        cmd
    }

    /// Runs `instamon add <fixture>` and asserts success.
    pub fn add_fixture(&self, name: &str) {
        self.cmd()
            .arg("add")
            .arg(fixture_path(name))
            .assert()
            .success();
    }

    /// The session's records exported as CSV.
    pub fn exported(&self) -> String {
        let output = self.cmd().arg("export").output().expect("export should run");
        assert!(output.status.success(), "export failed: {:?}", output);
        String::from_utf8(output.stdout).expect("export output is UTF-8")
    }
}
