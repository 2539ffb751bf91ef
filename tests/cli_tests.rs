use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rwt, temp_dir};

#[test]
fn test_forecast_with_leave() {
    let home = temp_dir("cli_forecast");

    rwt(&home)
        .args(["forecast", "--year", "2025", "--month", "1", "--leave", "3"])
        .assert()
        .success()
        .stdout(contains("Required working days: 21"))
        .stdout(contains("Forecast working days: 18"))
        .stdout(contains("0.9h (54 min)"));
}

#[test]
fn test_forecast_with_too_much_leave_fails() {
    let home = temp_dir("cli_forecast_invalid");

    rwt(&home)
        .args(["forecast", "--year", "2025", "--month", "1", "--leave", "25"])
        .assert()
        .failure()
        .stderr(contains("Invalid schedule"));
}

#[test]
fn test_round_command() {
    let home = temp_dir("cli_round");

    rwt(&home)
        .args(["round", "2024-11-01 10:10:42"])
        .assert()
        .success()
        .stdout(contains("2024-11-01 10:15:00"));
}

#[test]
fn test_record_requires_credentials_for_remote_store() {
    let home = temp_dir("cli_record_no_token");

    rwt(&home)
        .args(["record", "2024-11-01", "--in", "10:00", "--out", "20:00"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_record_then_summary_and_list_locally() {
    let home = temp_dir("cli_local_roundtrip");
    let csv_dir = home.join("csv").to_string_lossy().to_string();

    rwt(&home)
        .args(["--csv-dir", &csv_dir, "--test", "init"])
        .assert()
        .success();

    rwt(&home)
        .args([
            "--csv-dir",
            &csv_dir,
            "record",
            "2024-11-01",
            "--in",
            "10:00",
            "--out",
            "20:00",
            "--content",
            "refactoring",
            "--local-only",
        ])
        .assert()
        .success()
        .stdout(contains("worked 09:00"));

    rwt(&home)
        .args([
            "--csv-dir",
            &csv_dir,
            "record",
            "2024-11-05",
            "--in",
            "09:30",
            "--out",
            "19:00",
            "--local-only",
        ])
        .assert()
        .success();

    rwt(&home)
        .args(["--csv-dir", &csv_dir, "summary", "--local", "--date", "2024-11-30"])
        .assert()
        .success()
        .stdout(contains("2 day(s) worked, 17 hours 30 minutes"));

    rwt(&home)
        .args(["--csv-dir", &csv_dir, "summary", "--local", "--date", "2024-12-01"])
        .assert()
        .success()
        .stdout(contains("No entries recorded"));

    rwt(&home)
        .args(["--csv-dir", &csv_dir, "list", "--local", "--month", "2024-11"])
        .assert()
        .success()
        .stdout(contains("2024/11/01").and(contains("2024/11/05")))
        .stdout(contains("refactoring"));

    rwt(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("record"));
}

#[test]
fn test_record_rejects_negative_range() {
    let home = temp_dir("cli_record_negative");
    let csv_dir = home.join("csv").to_string_lossy().to_string();

    rwt(&home)
        .args([
            "--csv-dir",
            &csv_dir,
            "record",
            "2024-11-01",
            "--in",
            "10:00",
            "--out",
            "10:30",
            "--local-only",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));
}
