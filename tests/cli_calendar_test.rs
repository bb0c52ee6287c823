//! Integration tests for coordination calendar commands:
//! - `bsn calendar list` day lookup and view-mode highlights
//! - `bsn calendar add` validation and channel-derived theming
//! - `bsn calendar remove`

use assert_cmd::Command;
use predicates::prelude::*;

fn bsn() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsn"));
    cmd.env_remove("BOSUN_TECHNICIAN");
    cmd
}

#[test]
fn test_calendar_list_all() {
    bsn()
        .args(["calendar", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":7"))
        .stdout(predicate::str::contains("\"id\":\"cal-23-1\""));
}

#[test]
fn test_calendar_list_single_day() {
    bsn()
        .args(["calendar", "list", "--day", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":2"))
        .stdout(predicate::str::contains("\"id\":\"cal-25-1\""))
        .stdout(predicate::str::contains("\"id\":\"cal-25-2\""));
}

#[test]
fn test_calendar_list_empty_day() {
    bsn()
        .args(["calendar", "list", "--day", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":0"));
}

#[test]
fn test_calendar_week_view_highlights_without_filtering() {
    // Week view around day 25 highlights 22..=28 but still lists all events.
    bsn()
        .args(["calendar", "list", "--view", "week", "--selected", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\":7"))
        .stdout(predicate::str::contains(
            "\"visible_days\":[22,23,24,25,26,27,28]",
        ));
}

#[test]
fn test_calendar_today_view() {
    bsn()
        .args(["calendar", "list", "--view", "today", "--selected", "27"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"visible_days\":[27]"));
}

#[test]
fn test_calendar_month_view_has_no_highlight_set() {
    bsn()
        .args(["calendar", "list", "--view", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visible_days").not());
}

#[test]
fn test_calendar_add_derives_theme_from_channel() {
    // Two events on the same channel always carry the same theme.
    bsn()
        .args(["calendar", "add", "Cable pull", "--day", "12", "--channel", "field"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"day\":12"))
        .stdout(predicate::str::contains(
            "\"theme\":\"border border-emerald-200 bg-emerald-50 text-emerald-700\"",
        ));
}

#[test]
fn test_calendar_add_empty_label_fails() {
    bsn()
        .args(["calendar", "add", "  ", "--day", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("event label is required"));
}

#[test]
fn test_calendar_add_day_out_of_range_fails() {
    bsn()
        .args(["calendar", "add", "رویداد", "--day", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("day must be between 1 and 30"));
}

#[test]
fn test_calendar_remove() {
    bsn()
        .args(["calendar", "remove", "cal-24-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remaining\":6"));
}

#[test]
fn test_calendar_remove_unknown_id_fails() {
    bsn()
        .args(["calendar", "remove", "cal-ffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entity not found"));
}
