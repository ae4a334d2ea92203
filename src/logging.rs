//! Logging setup.
//!
//! Logs go to stderr so that stdout stays clean for CSV and table output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive (e.g. `instamon=debug`).
pub const LOG_ENV: &str = "INSTAMON_LOG";

/// Default directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
