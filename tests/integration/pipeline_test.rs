//! Library-level tests of the full flow: ingest, session, scrape and export.

use std::collections::HashSet;

use tempfile::TempDir;

use instamon::caption::is_normalized;
use instamon::export::{csv, MemorySheet, SheetExporter};
use instamon::ingest::IngestError;
use instamon::scrape::{parse_links, scrape_links, ArchiveSource, ScrapeError};
use instamon::{ingest, IngestOptions, Session, SessionStore};

use crate::helpers::{fixture_path, load_fixture};

#[test]
fn ingested_records_are_normalized_and_unique() {
    let input = format!(
        "{}{}",
        load_fixture("posts.csv"),
        load_fixture("posts.csv")
    );
    let mut seen = HashSet::new();
    let batch = ingest(&input, &mut seen, IngestOptions::default()).unwrap();

    assert_eq!(batch.records.len(), 3);
    assert_eq!(batch.skipped, 3);
    assert!(batch.records.iter().all(|r| is_normalized(&r.caption)));
    assert_eq!(seen.len(), 3);
    assert!(batch.links().all(|l| seen.contains(l)));
}

#[test]
fn failed_ingest_leaves_the_running_set_alone() {
    let mut seen: HashSet<String> = ["https://www.instagram.com/p/OLD/".to_string()].into();
    let err = ingest(
        &load_fixture("bad_timestamp.csv"),
        &mut seen,
        IngestOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, IngestError::Timestamp { line: 2, .. }));
    assert_eq!(seen.len(), 1);
}

#[test]
fn session_survives_a_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));

    let mut session = store.load().unwrap();
    assert!(session.is_empty());

    let mut seen = session.seen_links();
    let batch = ingest(
        &load_fixture("posts.csv"),
        &mut seen,
        IngestOptions::with_submitter(Some("Rina")),
    )
    .unwrap();
    session.commit(batch.records);
    store.save(&session).unwrap();

    let loaded: Session = store.load().unwrap();
    assert_eq!(loaded, session);
    assert_eq!(loaded.last_batch().len(), 3);
    assert!(loaded.records().iter().all(|r| r.submitter.as_deref() == Some("Rina")));
}

#[test]
fn scrape_and_ingest_share_one_dedup_set() {
    let mut session = Session::new();
    let mut seen = session.seen_links();
    let batch = ingest(
        "https://www.instagram.com/p/DDD444/,Sudah ada.,2024-04-10\n",
        &mut seen,
        IngestOptions::default(),
    )
    .unwrap();
    session.commit(batch.records);

    let source = ArchiveSource::load(&fixture_path("archive.json")).unwrap();
    let links = parse_links(&load_fixture("links.txt"));
    let mut seen = session.seen_links();
    let outcomes = scrape_links(&source, &links, &mut seen, None);

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(
        outcomes[0].result,
        Err(ScrapeError::Duplicate(_))
    ));
    assert!(matches!(outcomes[1].result, Err(ScrapeError::NotFound(_))));
    let record = outcomes[2].result.as_ref().unwrap();
    assert_eq!(record.caption, "");
    assert_eq!(record.date, "04-11-2024");
}

#[test]
fn sheet_rows_follow_export_order() {
    let mut seen = HashSet::new();
    let batch = ingest(
        &load_fixture("posts.csv"),
        &mut seen,
        IngestOptions::default(),
    )
    .unwrap();

    let exported = csv::to_string(&batch.records).unwrap();
    let mut exporter = SheetExporter::new(MemorySheet::new());
    assert_eq!(exporter.push(&batch.records).unwrap(), 3);

    let sheet_links: Vec<&str> = exporter.backend().rows()[1..]
        .iter()
        .map(|row| row[3].as_str())
        .collect();
    let export_links: Vec<&str> = exported
        .lines()
        .skip(1)
        .map(|l| l.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(sheet_links, export_links);
}
