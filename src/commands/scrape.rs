//! `scrape` handler: collect posts for a list of links.

use anyhow::{bail, Result};

use instamon::cli::ScrapeArgs;
use instamon::scrape::{parse_links, scrape_links, ArchiveSource, ScrapeSummary};
use instamon::theme::current_theme;

use super::{plural, read_input, Context};

pub fn handle(ctx: &Context, args: ScrapeArgs) -> Result<()> {
    let theme = current_theme();
    let source = ArchiveSource::load(&args.archive)?;

    let links = parse_links(&read_input(args.links.as_deref())?);
    if links.is_empty() {
        bail!("No links given; expected one post link per line");
    }

    let submitter = args.submitter.or_else(|| ctx.config.ingest.submitter.clone());
    let (store, mut session) = ctx.load_session()?;
    let mut seen = session.seen_links();

    let outcomes = scrape_links(&source, &links, &mut seen, submitter.as_deref());
    let summary = ScrapeSummary::from(outcomes.as_slice());

    let mut records = Vec::with_capacity(summary.succeeded);
    for outcome in outcomes {
        match outcome.result {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("{}", theme.error_text(&format!("Failed: {} ({e})", outcome.link))),
        }
    }

    session.commit(records);
    store.save(&session)?;

    println!(
        "{}",
        theme.success_text(&format!("Collected {}", plural(summary.succeeded, "post")))
    );
    if summary.failed > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!("{} failed", plural(summary.failed, "link")))
        );
    }
    Ok(())
}
