#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `walletcamp` pinned to a scratch data directory and a fixed "today".
fn wc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("walletcamp").unwrap();
    cmd.arg("--data-dir")
        .arg(dir.path())
        .args(["--today", "2024-05-21"])
        .env_remove("OPENAI_API_KEY")
        .env_remove("WALLETCAMP_DB")
        .env_remove("WALLETCAMP_TODAY")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    wc(dir).arg("add").args(args).assert().success();
}

// ── Entry ─────────────────────────────────────────────────────

#[test]
fn test_add_list_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, &["--date", "2024-05-01", "--time", "12:30", "--major", "Food", "--minor", "Delivery", "--cost", "15000"]);
    add(&dir, &["--date", "2024-05-01", "--major", "Housing/Comm", "--minor", "Rent", "--cost", "500000"]);

    wc(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delivery").and(predicate::str::contains("Breath")));

    wc(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("₩515,000"))
        .stdout(predicate::str::contains("2.9%"))
        .stdout(predicate::str::contains("Calm"));

    assert!(dir.path().join("walletcamp.db").exists());
}

#[test]
fn test_invalid_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    wc(&dir)
        .args(["add", "--major", "Food", "--minor", "Delivery", "--cost", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cost must be non-negative"));
}

#[test]
fn test_ambiguous_delete_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let entry = ["--date", "2024-05-02", "--time", "08:00", "--major", "Transport", "--minor", "Taxi/Rideshare", "--cost", "7000"];
    add(&dir, &entry);
    add(&dir, &entry);

    wc(&dir)
        .args(["delete", "--date", "2024-05-02", "--time", "08:00", "--major", "Transport", "--minor", "Taxi/Rideshare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 records"));

    wc(&dir)
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxi/Rideshare").count(2));
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    wc(&dir)
        .args(["budget", "set", "300000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget saved"));

    let saved = std::fs::read_to_string(dir.path().join("budget.json")).unwrap();
    assert!(saved.contains("300000"));

    wc(&dir)
        .arg("budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active (Calm)"))
        .stdout(predicate::str::contains("Days remaining   10"));
}

// ── Views ─────────────────────────────────────────────────────

#[test]
fn test_forecast_feedback_degrades_without_key() {
    let dir = tempfile::tempdir().unwrap();
    wc(&dir)
        .args(["forecast", "--feedback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feedback unavailable"));
}

#[test]
fn test_categories() {
    let dir = tempfile::tempdir().unwrap();
    wc(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings/Investment"))
        .stdout(predicate::str::contains("Growth"));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    add(&dir, &["--source", "card", "--date", "2024-03-09", "--major", "Culture/Hobby", "--minor", "Travel", "--cost", "250000", "--memo", "Jeju"]);
    let out = dir.path().join("march.csv");
    wc(&dir)
        .args(["export", "--month", "2024-03", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records for 2024-03"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.contains("Culture/Hobby,Travel,250000,Impulse,Jeju"));
}

#[test]
fn test_unknown_tag_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    wc(&dir)
        .args(["patterns", "--tags", "impulse,greed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greed"));
}
