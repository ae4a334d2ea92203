//! `completions` handler.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use instamon::cli::Cli;

pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
