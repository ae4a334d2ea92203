//! Integration tests for the session commands (CLI): scrape, list, reset,
//! dashboard, config and completions.

use predicates::prelude::*;

use crate::helpers::{fixture_path, Sandbox};

// ============================================================================
// scrape
// ============================================================================

#[test]
fn scrape_collects_known_links_and_reports_failures() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["scrape", "--archive"])
        .arg(fixture_path("archive.json"))
        .arg(fixture_path("links.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Collected 2 posts"))
        .stdout(predicate::str::contains("1 link failed"))
        .stderr(predicate::str::contains(
            "Failed: https://www.instagram.com/p/MISSING/",
        ));

    insta::assert_snapshot!(sandbox.exported(), @r"
    Caption,Tanggal,Link
    Update harga beras minggu ini.,04-10-2024,https://www.instagram.com/p/DDD444/
    ,04-11-2024,https://www.instagram.com/p/EEE555/?igsh=abc
    ");
}

#[test]
fn scrape_skips_links_already_added() {
    let sandbox = Sandbox::new();
    let archive = fixture_path("archive.json");
    for _ in 0..2 {
        sandbox
            .cmd()
            .args(["scrape", "--archive"])
            .arg(&archive)
            .write_stdin("https://www.instagram.com/p/DDD444/\n")
            .assert()
            .success();
    }

    assert_eq!(sandbox.exported().lines().count(), 2);
}

#[test]
fn scrape_without_links_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["scrape", "--archive"])
        .arg(fixture_path("archive.json"))
        .write_stdin("\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No links given"));
}

#[test]
fn scrape_requires_archive() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("scrape")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--archive"));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_empty_session() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts collected yet."));
}

#[test]
fn list_shows_newest_first() {
    let sandbox = Sandbox::new();
    sandbox.add_fixture("posts.csv");

    let output = sandbox.cmd().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newest = stdout.find("Halo semua").expect("newest row listed");
    let oldest = stdout.find("Rilis BPS inflasi turun!").expect("oldest row listed");
    assert!(newest < oldest);
    assert!(stdout.contains("3 posts"));
}

// ============================================================================
// reset
// ============================================================================

#[test]
fn reset_with_yes_clears_the_session() {
    let sandbox = Sandbox::new();
    sandbox.add_fixture("posts.csv");

    sandbox
        .cmd()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 posts."));

    assert_eq!(sandbox.exported(), "Caption,Tanggal,Link\n");
}

#[test]
fn reset_without_yes_is_refused_when_not_interactive() {
    let sandbox = Sandbox::new();
    sandbox.add_fixture("posts.csv");

    sandbox
        .cmd()
        .arg("reset")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("use --yes"))
        .stdout(predicate::str::contains("No changes made."));

    assert_eq!(sandbox.exported().lines().count(), 4);
}

#[test]
fn reset_then_add_accepts_previous_links_again() {
    let sandbox = Sandbox::new();
    sandbox.add_fixture("posts.csv");
    sandbox.cmd().args(["reset", "-y"]).assert().success();

    sandbox
        .cmd()
        .arg("add")
        .arg(fixture_path("posts.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 posts"));
}

#[test]
fn reset_empty_session() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to reset."));
}

// ============================================================================
// dashboard / config / completions
// ============================================================================

#[test]
fn dashboard_unlinked() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dashboard linked yet."));
}

#[test]
fn dashboard_prints_embed_snippet() {
    let sandbox =
        Sandbox::with_config("[dashboard]\nurl = \"https://lookerstudio.example/embed/abc\"\n");
    sandbox
        .cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<iframe src="https://lookerstudio.example/embed/abc" width="1200" height="650""#,
        ));
}

#[test]
fn config_path_honors_env() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            sandbox.config_path().display().to_string(),
        ));
}

#[test]
fn config_show_prints_effective_settings() {
    let sandbox = Sandbox::with_config("[ingest]\nsubmitter = \"Budi\"\n");
    sandbox
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("submitter = \"Budi\""))
        .stdout(predicate::str::contains("height = 650"));
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::with_config("[ingest\n");
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn completions_bash() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("instamon"));
}
