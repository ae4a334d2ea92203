//! Integration tests for `add` (CLI)

use predicates::prelude::*;

use crate::helpers::{fixture_path, load_fixture, Sandbox};

const POSTS_CSV: &str = "\
Caption,Tanggal,Link
Rilis BPS inflasi turun!,03-01-2024,https://www.instagram.com/p/AAA111/
Sensus Pertanian 2023 Ayo berpartisipasi.,03-02-2024,https://www.instagram.com/p/BBB222/
Halo semua,03-03-2024,https://www.instagram.com/reel/CCC333/
";

#[test]
fn add_help_exits_0_and_shows_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--keep-going"))
        .stdout(predicate::str::contains("--submitter"));
}

#[test]
fn add_file_normalizes_and_stores_rows() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("add")
        .arg(fixture_path("posts.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 posts"));

    assert!(sandbox.session_path().exists());
    assert_eq!(sandbox.exported(), POSTS_CSV);
}

#[test]
fn add_reads_standard_input() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("add")
        .write_stdin(load_fixture("posts.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 posts"));

    assert_eq!(sandbox.exported(), POSTS_CSV);
}

#[test]
fn add_twice_skips_known_links() {
    let sandbox = Sandbox::new();
    sandbox.add_fixture("posts.csv");

    sandbox
        .cmd()
        .arg("add")
        .arg(fixture_path("posts.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0 posts"))
        .stdout(predicate::str::contains("Skipped 3 rows"));

    assert_eq!(sandbox.exported(), POSTS_CSV);
}

#[test]
fn add_with_bad_timestamp_adds_nothing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("add")
        .arg(fixture_path("bad_timestamp.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid timestamp 'kemarin' on line 2"))
        .stderr(predicate::str::contains("nothing was added"));

    assert_eq!(sandbox.exported(), "Caption,Tanggal,Link\n");
}

#[test]
fn add_keep_going_adds_the_valid_rows() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "--keep-going"])
        .arg(fixture_path("bad_timestamp.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 posts"))
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("1 row rejected"));

    let csv = sandbox.exported();
    assert!(csv.contains("GOOD01"));
    assert!(csv.contains("GOOD03"));
    assert!(!csv.contains("BAD002"));
}

#[test]
fn add_keep_going_from_config() {
    let sandbox = Sandbox::with_config("[ingest]\nkeep_going = true\n");
    sandbox
        .cmd()
        .arg("add")
        .arg(fixture_path("bad_timestamp.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 posts"));
}

#[test]
fn add_with_submitter_adds_column() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "--submitter", "Rina"])
        .arg(fixture_path("posts.csv"))
        .assert()
        .success();

    let csv = sandbox.exported();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Caption,Tanggal,Link,Penginput"));
    assert!(lines.all(|l| l.ends_with(",Rina")));
}

#[test]
fn add_submitter_from_config() {
    let sandbox = Sandbox::with_config("[ingest]\nsubmitter = \"Budi\"\n");
    sandbox.add_fixture("posts.csv");

    assert!(sandbox.exported().contains(",Budi\n"));
}

#[test]
fn add_with_header_skips_first_row() {
    let sandbox = Sandbox::new();
    let input = format!("link,caption,timestamp\n{}", load_fixture("posts.csv"));
    sandbox
        .cmd()
        .args(["add", "--has-header"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 posts"));
}

#[test]
fn add_empty_input_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("add")
        .write_stdin("  \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input is empty"));

    assert!(!sandbox.session_path().exists());
}

#[test]
fn add_missing_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["add", "does-not-exist.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read does-not-exist.csv"));
}

#[test]
fn add_accepts_basic_and_reduced_iso_timestamps() {
    let sandbox = Sandbox::new();
    let input = "\
https://www.instagram.com/p/T1/,Satu.,20240101T100000Z
https://www.instagram.com/p/T2/,Dua.,2024-01-02T10
https://www.instagram.com/p/T3/,Tiga.,\"2024-01-03T10:00:00,5Z\"
https://www.instagram.com/p/T4/,Empat.,2024-01-04T10:00:00+07
https://www.instagram.com/p/T5/,Lima.,20240105
";
    sandbox
        .cmd()
        .arg("add")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 5 posts"));

    let dates: Vec<String> = sandbox
        .exported()
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(1).unwrap().to_string())
        .collect();
    assert_eq!(
        dates,
        ["01-01-2024", "01-02-2024", "01-03-2024", "01-04-2024", "01-05-2024"]
    );
}
