//! Smoke tests for the bsn binary: it runs, orients, and prints both
//! output formats.

use assert_cmd::Command;
use predicates::prelude::*;

fn bsn() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bsn"))
}

#[test]
fn test_no_args_orients() {
    bsn()
        .env_remove("BOSUN_TECHNICIAN")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cases\":4"))
        .stdout(predicate::str::contains("\"reports\":5"));
}

#[test]
fn test_orient_json() {
    bsn()
        .arg("orient")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"board_items\":4"))
        .stdout(predicate::str::contains("\"calendar_events\":7"))
        .stdout(predicate::str::contains("\"quality_gates\":3"))
        .stdout(predicate::str::contains("\"projects\":3"));
}

#[test]
fn test_orient_human() {
    bsn()
        .args(["orient", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workspace for"))
        .stdout(predicate::str::contains("reports: 5"));
}

#[test]
fn test_orient_reports_workflow_buckets() {
    // Seed: two field-stage cases, two handover-stage cases.
    bsn()
        .arg("orient")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"receive\":0"))
        .stdout(predicate::str::contains("\"field\":2"))
        .stdout(predicate::str::contains("\"handover\":2"));
}

#[test]
fn test_help_runs() {
    bsn()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("technician workspace"));
}

#[test]
fn test_metrics_today() {
    bsn()
        .args(["metrics", "--range", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_volume\":94"))
        .stdout(predicate::str::contains("\"percent\":34"));
}

#[test]
fn test_metrics_unknown_range_fails() {
    bsn()
        .args(["metrics", "--range", "yearly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown time range"));
}

#[test]
fn test_note_add_and_empty_rejected() {
    bsn()
        .args(["note", "add", "تماس با QA پیش از تحویل"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"note-"));

    bsn()
        .args(["note", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("note text is required"));
}

#[test]
fn test_stream_list() {
    bsn()
        .arg("stream")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"))
        .stdout(predicate::str::contains("\"id\":\"stream-body\""))
        .stdout(predicate::str::contains("\"progress\":72"));
}

#[test]
fn test_note_list_starts_empty() {
    bsn()
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"));
}
