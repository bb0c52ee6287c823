//! Integration tests for checklist and workbench project commands:
//! - `bsn checklist show` templates with completion stats
//! - `bsn checklist toggle` flips exactly one flag
//! - `bsn project list` and the monotonic approval requests

use assert_cmd::Command;
use predicates::prelude::*;

fn bsn() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsn"));
    cmd.env_remove("BOSUN_TECHNICIAN");
    cmd
}

// === Checklist Tests ===

#[test]
fn test_checklist_show_seeded_progress() {
    // utn-2045 overview: 3 items, 1 initially done.
    bsn()
        .args(["checklist", "show", "utn-2045-workbench", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"progress\":{\"total\":3,\"completed\":1,\"percent\":33}",
        ))
        .stdout(predicate::str::contains("utn2045-overview-check-1"));
}

#[test]
fn test_checklist_show_unknown_pair_is_empty() {
    bsn()
        .args(["checklist", "show", "utn-2045-workbench", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"progress\":{\"total\":0,\"completed\":0,\"percent\":0}",
        ));
}

#[test]
fn test_checklist_toggle_updates_progress() {
    // Toggling a second item done moves 1/3 to 2/3 (67%).
    bsn()
        .args([
            "checklist",
            "toggle",
            "utn-2045-workbench",
            "overview",
            "utn2045-overview-check-2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"progress\":{\"total\":3,\"completed\":2,\"percent\":67}",
        ));
}

#[test]
fn test_checklist_toggle_off() {
    // Toggling an initially-done item clears it: 0/3.
    bsn()
        .args([
            "checklist",
            "toggle",
            "utn-2045-workbench",
            "overview",
            "utn2045-overview-check-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"progress\":{\"total\":3,\"completed\":0,\"percent\":0}",
        ));
}

#[test]
fn test_checklist_toggle_unknown_item_fails() {
    bsn()
        .args([
            "checklist",
            "toggle",
            "utn-2045-workbench",
            "overview",
            "check-99",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entity not found"));
}

#[test]
fn test_checklist_show_human() {
    bsn()
        .args(["-H", "checklist", "show", "utn-2101-workbench", "capa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3 done (33%)"));
}

// === Project Tests ===

#[test]
fn test_project_list() {
    bsn()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":3"))
        .stdout(predicate::str::contains("\"external_ref\":\"UTN-2045\""))
        .stdout(predicate::str::contains("\"stamp_requested\":false"));
}

#[test]
fn test_project_approve_stamp() {
    bsn()
        .args(["project", "approve", "utn-2101-workbench", "stamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stamp_requested\":true"))
        .stdout(predicate::str::contains("\"signature_requested\":false"))
        .stdout(predicate::str::contains("UTN-2101"));
}

#[test]
fn test_project_approve_signature_human_notice() {
    bsn()
        .args(["-H", "project", "approve", "utn-2045-workbench", "signature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("امضای الکترونیکی UTN-2045 ثبت شد."));
}

#[test]
fn test_project_approve_unknown_kind_fails() {
    bsn()
        .args(["project", "approve", "utn-2045-workbench", "seal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown approval kind"));
}

#[test]
fn test_project_approve_unknown_project_fails() {
    bsn()
        .args(["project", "approve", "utn-0000-workbench", "stamp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entity not found"));
}
