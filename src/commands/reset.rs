//! `reset` handler: drop every collected post.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use instamon::theme::current_theme;

use super::{plural, Context};

pub fn handle(ctx: &Context, yes: bool) -> Result<()> {
    let theme = current_theme();
    let (store, mut session) = ctx.load_session()?;

    if session.is_empty() {
        println!("{}", theme.secondary_text("Nothing to reset."));
        return Ok(());
    }

    let count = session.len();
    if !yes && !prompt_confirmation(&format!("Remove {}?", plural(count, "collected post")))? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    session.clear();
    store.save(&session)?;
    println!(
        "{}",
        theme.success_text(&format!("Removed {}.", plural(count, "post")))
    );
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to reset without a prompt")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
