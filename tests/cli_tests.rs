//! CLI-level tests running the compiled binary against a temporary store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Helper to set up a Command pointed at an isolated data directory
fn set_up_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_clear()
        .env("HOME", data_dir.path())
        .env("MOODLOG_DIR", data_dir.path());
    cmd
}

#[test]
fn test_cli_requires_subcommand() {
    let data_dir = TempDir::new().unwrap();
    let mut cmd = set_up_command(&data_dir);
    cmd.assert().failure();
}

#[test]
fn test_cli_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args([
            "add", "--mood", "happy", "--glyph", "😊", "--value", "7.5", "--note", "good day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry"));

    set_up_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("😊"))
        .stdout(predicate::str::contains("7.5"))
        .stdout(predicate::str::contains("good day"));
}

#[test]
fn test_cli_add_rejects_out_of_range_value() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["add", "--mood", "happy", "--glyph", "😊", "--value", "12.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("12"));
}

#[test]
fn test_cli_list_empty_store() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood entries found"));
}

#[test]
fn test_cli_stats_empty_store_reports_no_data() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood entries yet."));
}

#[test]
fn test_cli_seed_then_stats_and_trends() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["seed", "--days", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded"));

    set_up_command(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average mood:"))
        .stdout(predicate::str::contains("Streak:"));

    set_up_command(&data_dir)
        .args(["trends", "--period", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week "));
}

#[test]
fn test_cli_calendar_for_explicit_month() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args([
            "add",
            "--mood",
            "happy",
            "--glyph",
            "😊",
            "--value",
            "8.0",
            "--date",
            "2024-05-10T09:00:00",
        ])
        .assert()
        .success();

    set_up_command(&data_dir)
        .args(["calendar", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("May 2024"))
        .stdout(predicate::str::contains("8.0"));
}

#[test]
fn test_cli_calendar_rejects_bad_month() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["calendar", "--month", "May-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn test_cli_delete_unknown_id_fails() {
    let data_dir = TempDir::new().unwrap();

    set_up_command(&data_dir)
        .args(["delete", "no-such-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
