//! `list` and `view` handlers.

use anyhow::Result;

use instamon::table;
use instamon::theme::current_theme;
use instamon::tui::RecordsApp;
use instamon::Session;

use super::{plural, Context};

fn selection(session: &Session, last: bool) -> &[instamon::Record] {
    if last {
        session.last_batch()
    } else {
        session.records()
    }
}

/// Print the collected posts as a table.
pub fn handle_list(ctx: &Context, last: bool) -> Result<()> {
    let theme = current_theme();
    let (_, session) = ctx.load_session()?;
    let records = selection(&session, last);

    if records.is_empty() {
        println!("{}", theme.secondary_text("No posts collected yet."));
        return Ok(());
    }

    print!("{}", table::render(records, table::terminal_width()));
    println!("{}", theme.secondary_text(&plural(records.len(), "post")));
    Ok(())
}

/// Open the interactive viewer.
#[cfg(not(tarpaulin_include))]
pub fn handle_view(ctx: &Context, last: bool) -> Result<()> {
    let (_, session) = ctx.load_session()?;
    let records = selection(&session, last);

    if records.is_empty() {
        println!("{}", current_theme().secondary_text("No posts collected yet."));
        return Ok(());
    }

    let title = if last { "Last batch" } else { "Collected posts" };
    RecordsApp::new(records, title).run()
}
