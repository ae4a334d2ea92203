//! Command line definition.
//!
//! Lives in the library so the `xtask` crate can render the man page.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// InstaMon - collect, clean and export Instagram post metadata
#[derive(Debug, Parser)]
#[command(name = "instamon", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add posts from CSV rows of link,caption,timestamp
    ///
    /// Reads FILE, or standard input when FILE is omitted or "-".
    Add(AddArgs),

    /// Collect posts for a list of links from a post archive
    Scrape(ScrapeArgs),

    /// Print the collected posts as a table (newest first)
    List {
        /// Only show the most recently added batch
        #[arg(long)]
        last: bool,
    },

    /// Browse the collected posts interactively
    View {
        /// Only show the most recently added batch
        #[arg(long)]
        last: bool,
    },

    /// Write the collected posts as CSV
    Export {
        /// Output file; bare `-o` uses the default download name
        /// (without `-o`: standard output)
        #[arg(
            short,
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = crate::export::csv::DEFAULT_FILE_NAME
        )]
        output: Option<PathBuf>,

        /// Only export the most recently added batch
        #[arg(long)]
        last: bool,
    },

    /// Append posts to the reporting sheet
    Push {
        /// Push every collected post instead of only the last batch
        #[arg(long)]
        all: bool,

        /// Show the rows that would be written without touching the sheet
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove all collected posts
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the monitoring dashboard link
    Dashboard,

    /// Show or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// CSV file to read ("-" for standard input)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Name recorded as the submitter of these posts
    #[arg(short, long, value_name = "NAME")]
    pub submitter: Option<String>,

    /// Skip the first row of the input
    #[arg(long)]
    pub has_header: bool,

    /// Keep valid rows and report bad ones instead of rejecting the input
    #[arg(short, long)]
    pub keep_going: bool,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// JSON archive of captured posts
    #[arg(short, long, value_name = "FILE")]
    pub archive: PathBuf,

    /// File with one post link per line ("-" or omitted for standard input)
    #[arg(value_name = "LINKS")]
    pub links: Option<PathBuf>,

    /// Name recorded as the submitter of these posts
    #[arg(short, long, value_name = "NAME")]
    pub submitter: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
}
