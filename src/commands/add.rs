//! `add` handler: ingest CSV rows into the session.

use anyhow::{bail, Context as _, Result};

use instamon::cli::AddArgs;
use instamon::ingest::{ingest, ingest_rows, IngestOptions, RowOutcome, RowSummary, SkipReason};
use instamon::theme::current_theme;

use super::{plural, read_input, Context};

pub fn handle(ctx: &Context, args: AddArgs) -> Result<()> {
    let theme = current_theme();
    let input = read_input(args.file.as_deref())?;
    if input.trim().is_empty() {
        bail!("Input is empty; expected rows of link,caption,timestamp");
    }

    let submitter = args.submitter.or_else(|| ctx.config.ingest.submitter.clone());
    let options = IngestOptions {
        submitter: submitter.as_deref(),
        has_header: args.has_header || ctx.config.ingest.has_header,
    };
    let keep_going = args.keep_going || ctx.config.ingest.keep_going;

    let (store, mut session) = ctx.load_session()?;
    let mut seen = session.seen_links();

    let (records, skipped) = if keep_going {
        let outcomes = ingest_rows(&input, &mut seen, options);
        let summary = RowSummary::from_outcomes(&outcomes);
        for outcome in &outcomes {
            report_problem(outcome);
        }
        if summary.malformed + summary.invalid > 0 {
            eprintln!(
                "{}",
                theme.error_text(&format!(
                    "{} rejected",
                    plural(summary.malformed + summary.invalid, "row")
                ))
            );
        }
        let records: Vec<_> = outcomes
            .into_iter()
            .filter_map(RowOutcome::into_record)
            .collect();
        (records, summary.skipped)
    } else {
        let batch = ingest(&input, &mut seen, options)
            .context("Input rejected, nothing was added (use --keep-going to add the valid rows)")?;
        (batch.records, batch.skipped)
    };

    let added = records.len();
    session.commit(records);
    store.save(&session)?;

    println!(
        "{}",
        theme.success_text(&format!("Added {}", plural(added, "post")))
    );
    if skipped > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Skipped {} (duplicate or empty link)",
                plural(skipped, "row")
            ))
        );
    }
    Ok(())
}

fn report_problem(outcome: &RowOutcome) {
    let theme = current_theme();
    let message = match outcome {
        RowOutcome::Accepted(_) => return,
        RowOutcome::Skipped {
            line,
            reason: SkipReason::Duplicate,
        } => format!("line {line}: duplicate link"),
        RowOutcome::Skipped {
            line,
            reason: SkipReason::EmptyLink,
        } => format!("line {line}: empty link"),
        RowOutcome::Malformed { line, columns } => {
            format!("line {line}: expected 3 columns, found {columns}")
        }
        RowOutcome::Invalid(e) => e.to_string(),
    };
    eprintln!("{}", theme.secondary_text(&message));
}
