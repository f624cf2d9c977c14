//! Integration tests for the `apptbook` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the add, show and
//! search subcommands through the actual binary, including text-file round
//! trips, pretty printing, JSON output and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const DENTIST: [&str; 4] = ["Tanya", "Dentist", "07/25/2025 9:00 AM", "07/25/2025 10:00 AM"];
const LUNCH: [&str; 4] = ["Tanya", "Lunch", "07/25/2025 12:00 PM", "07/25/2025 1:00 PM"];

fn apptbook() -> Command {
    Command::cargo_bin("apptbook").unwrap()
}

/// Helper: run `add` for one appointment against a text file.
fn add_to(file: &Path, appt: [&str; 4]) {
    apptbook()
        .arg("add")
        .args(appt)
        .arg("-t")
        .arg(file)
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// add
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_creates_text_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");

    add_to(&file, DENTIST);

    let content = std::fs::read_to_string(&file).expect("text file must exist");
    assert_eq!(
        content,
        "Tanya\nDentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n"
    );
}

#[test]
fn add_appends_to_existing_file_in_order() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");

    add_to(&file, LUNCH);
    add_to(&file, DENTIST);

    let content = std::fs::read_to_string(&file).unwrap();
    assert_eq!(
        content,
        "Tanya\n\
         Dentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n\
         Lunch|07/25/2025 12:00 PM|07/25/2025 1:00 PM\n"
    );
}

#[test]
fn add_print_shows_the_new_appointment() {
    apptbook()
        .arg("add")
        .args(DENTIST)
        .arg("--print")
        .assert()
        .success()
        .stdout("Dentist from 07/25/2025 9:00 AM until 07/25/2025 10:00 AM\n");
}

#[test]
fn add_without_flags_prints_nothing() {
    apptbook()
        .arg("add")
        .args(DENTIST)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn add_pretty_to_stdout() {
    apptbook()
        .arg("add")
        .args(DENTIST)
        .args(["--pretty", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment book for Tanya (1 appointment)"))
        .stdout(predicate::str::contains("Duration: 60 minutes"));
}

#[test]
fn add_pretty_to_file() {
    let dir = TempDir::new().unwrap();
    let pretty = dir.path().join("pretty.txt");

    apptbook()
        .arg("add")
        .args(DENTIST)
        .arg("--pretty")
        .arg(&pretty)
        .assert()
        .success();

    let content = std::fs::read_to_string(&pretty).unwrap();
    assert!(content.contains("Dentist"), "pretty output: {content}");
    assert!(content.contains("Begins:   07/25/2025 9:00 AM"), "pretty output: {content}");
}

#[test]
fn add_rejects_owner_mismatch() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);

    apptbook()
        .args(["add", "Bob", "Gym", "07/26/2025 6:00 PM", "07/26/2025 7:00 PM", "-t"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));

    // The file is left untouched.
    let content = std::fs::read_to_string(&file).unwrap();
    assert!(!content.contains("Gym"));
}

#[test]
fn add_rejects_bad_timestamp() {
    apptbook()
        .args(["add", "Tanya", "Dentist", "2025-07-25 09:00", "07/25/2025 10:00 AM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid begin time"));
}

#[test]
fn add_rejects_end_before_begin() {
    apptbook()
        .args(["add", "Tanya", "Dentist", "07/25/2025 10:00 AM", "07/25/2025 9:00 AM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid appointment"));
}

#[test]
fn add_rejects_malformed_existing_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.txt");
    std::fs::write(&file, "Tanya\nThis is a bad line with no separator\n").unwrap();

    apptbook()
        .arg("add")
        .args(DENTIST)
        .arg("-t")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse appointment book"));
}

#[test]
fn add_missing_arguments_is_usage_error() {
    apptbook()
        .args(["add", "Tanya", "Dentist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ─────────────────────────────────────────────────────────────────────────────
// show
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn show_prints_text_format() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);

    apptbook()
        .arg("show")
        .arg("-t")
        .arg(&file)
        .assert()
        .success()
        .stdout("Tanya\nDentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n");
}

#[test]
fn show_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);

    let output = apptbook()
        .arg("show")
        .arg("-t")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["owner"], "Tanya");
    assert_eq!(value["appointments"][0]["description"], "Dentist");
    assert_eq!(value["appointments"][0]["begin"], "2025-07-25T09:00:00");
}

#[test]
fn show_missing_file_fails() {
    apptbook()
        .args(["show", "-t", "/nonexistent/apptbook/book.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn show_pretty_and_json_conflict() {
    apptbook()
        .args(["show", "-t", "whatever.txt", "--pretty", "--json"])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// search
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn search_is_inclusive_on_begin() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);
    add_to(&file, LUNCH);

    apptbook()
        .arg("search")
        .arg("-t")
        .arg(&file)
        .args(["--begin", "07/25/2025 9:00 AM", "--end", "07/25/2025 11:00 AM"])
        .assert()
        .success()
        .stdout("Tanya\nDentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n");

    apptbook()
        .arg("search")
        .arg("-t")
        .arg(&file)
        .args(["--begin", "07/25/2025 9:01 AM", "--end", "07/25/2025 12:00 PM"])
        .assert()
        .success()
        .stdout("Tanya\nLunch|07/25/2025 12:00 PM|07/25/2025 1:00 PM\n");
}

#[test]
fn search_with_no_hits_prints_owner_only() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);

    apptbook()
        .arg("search")
        .arg("-t")
        .arg(&file)
        .args(["--begin", "01/01/2030 9:00 AM", "--end", "01/02/2030 9:00 AM"])
        .assert()
        .success()
        .stdout("Tanya\n");
}

#[test]
fn search_rejects_bad_bound() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("tanya.txt");
    add_to(&file, DENTIST);

    apptbook()
        .arg("search")
        .arg("-t")
        .arg(&file)
        .args(["--begin", "soon", "--end", "07/25/2025 11:00 AM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid begin time"));
}
