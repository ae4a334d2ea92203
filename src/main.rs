use anyhow::Result;
use clap::Parser;

use instamon::cli::{Cli, Commands, ConfigCommands};
use instamon::logging;

mod commands;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Add(args) => commands::add::handle(&ctx, args),
        Commands::Scrape(args) => commands::scrape::handle(&ctx, args),
        Commands::List { last } => commands::list::handle_list(&ctx, last),
        Commands::View { last } => commands::list::handle_view(&ctx, last),
        Commands::Export { output, last } => commands::export::handle_export(&ctx, output, last),
        Commands::Push { all, dry_run } => commands::export::handle_push(&ctx, all, dry_run),
        Commands::Reset { yes } => commands::reset::handle(&ctx, yes),
        Commands::Dashboard => commands::dashboard::handle(&ctx),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&ctx),
            ConfigCommands::Path => commands::config::handle_path(&ctx),
            ConfigCommands::Edit => commands::config::handle_edit(&ctx),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
