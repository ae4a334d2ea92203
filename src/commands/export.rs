//! `export` and `push` handlers.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use instamon::export::{csv, CsvSheet, MemorySheet, SheetExporter};
use instamon::theme::current_theme;

use super::{plural, Context};

/// Write the collected posts as CSV to a file or stdout.
pub fn handle_export(ctx: &Context, output: Option<PathBuf>, last: bool) -> Result<()> {
    let (_, session) = ctx.load_session()?;
    let records = if last {
        session.last_batch()
    } else {
        session.records()
    };

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            csv::write_records(BufWriter::new(file), records)?;
            println!(
                "{}",
                current_theme().success_text(&format!(
                    "Wrote {} to {}",
                    plural(records.len(), "post"),
                    path.display()
                ))
            );
        }
        None => csv::write_records(io::stdout().lock(), records)?,
    }
    Ok(())
}

/// Append posts to the reporting sheet.
pub fn handle_push(ctx: &Context, all: bool, dry_run: bool) -> Result<()> {
    let theme = current_theme();
    let (_, session) = ctx.load_session()?;
    let records = if all {
        session.records()
    } else {
        session.last_batch()
    };

    if records.is_empty() {
        println!("{}", theme.secondary_text("Nothing to push."));
        return Ok(());
    }

    if dry_run {
        let mut exporter = SheetExporter::new(MemorySheet::new());
        exporter.push(records)?;
        for row in exporter.backend().rows() {
            println!("{}", theme.secondary_text(&row.join(" | ")));
        }
        println!(
            "{}",
            theme.primary_text(&format!(
                "Dry run: {} would be pushed",
                plural(records.len(), "row")
            ))
        );
        return Ok(());
    }

    let sheet_path = ctx.config.sheet_path()?;
    let mut exporter = SheetExporter::new(CsvSheet::new(&sheet_path));
    let written = exporter
        .push(records)
        .with_context(|| format!("Failed to push to {}", sheet_path.display()))?;

    println!(
        "{}",
        theme.success_text(&format!(
            "Pushed {} to {}",
            plural(written, "row"),
            sheet_path.display()
        ))
    );
    Ok(())
}
