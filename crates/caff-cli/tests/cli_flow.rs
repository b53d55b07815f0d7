//! End-to-end tests for the caffeine timeline CLI.
//!
//! Drives the compiled binary through complete flows: add and edit rows,
//! re-anchor the start date, sample the curve, probe it, and clear. Each test
//! gets its own temp home and snapshot path so state never leaks between
//! tests.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn caff_binary() -> String {
    env!("CARGO_BIN_EXE_caff").to_string()
}

/// Run `caff` against an isolated snapshot under `temp`.
fn caff(temp: &Path, basis: &str, args: &[&str]) -> Output {
    Command::new(caff_binary())
        .env("HOME", temp)
        .env("CAFF_SNAPSHOT_PATH", temp.join("snapshot.json"))
        .env("CAFF_TIME_BASIS", basis)
        .args(args)
        .output()
        .expect("failed to run caff")
}

/// Run and assert success, returning stdout.
fn caff_ok(temp: &Path, basis: &str, args: &[&str]) -> String {
    let output = caff(temp, basis, args);
    assert!(
        output.status.success(),
        "caff {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn fresh_session_starts_with_one_default_row() {
    let temp = TempDir::new().unwrap();
    let status = caff_ok(temp.path(), "absolute", &["status"]);

    assert!(status.contains("08:00"), "default row at 08:00:\n{status}");
    assert!(status.contains("80 mg"), "default mass is 80 mg:\n{status}");
    assert!(status.contains("Half-life:  5 h"), "default half-life:\n{status}");
}

#[test]
fn add_edit_and_total_flow() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);

    let added = caff_ok(
        temp.path(),
        "absolute",
        &["add", "--time", "09:00", "--drink", "espresso", "--amount", "espresso-shot"],
    );
    // 212 / 100 * 30, rounded
    assert!(added.contains("64 mg"), "espresso shot mass:\n{added}");

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("2024-03-01 08:00"), "default row date:\n{status}");
    assert!(status.contains("2024-03-01 09:00"), "added row sequenced:\n{status}");
    assert!(status.contains("Total on the curve: 144 mg"), "80 + 64:\n{status}");

    // Zeroing out a row keeps it visible but drops it from the curve
    caff_ok(temp.path(), "absolute", &["edit", "1", "--drink", "custom"]);
    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("(0 mg/100ml)"), "custom without a value resolves to 0:\n{status}");
    assert!(status.contains("Total on the curve: 80 mg"), "only the default row counts:\n{status}");
}

#[test]
fn series_spans_first_intake_to_fifteen_hours_past_last() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);
    caff_ok(temp.path(), "absolute", &["add", "--time", "09:00"]);

    let json = caff_ok(temp.path(), "absolute", &["series", "--json"]);
    let output: serde_json::Value = serde_json::from_str(&json).expect("series should be JSON");

    let samples = output["samples"].as_array().unwrap();
    // 08:00 through 09:00 + 15h at 0.25h steps
    assert_eq!(samples.len(), 65);
    assert!((samples[0]["level"].as_f64().unwrap() - 80.0).abs() < 1e-9);
    assert_eq!(samples[0]["label"], "3/1 8AM");
    assert_eq!(samples.last().unwrap()["label"], "3/2 12AM");
    assert!((output["halfLifeHours"].as_f64().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn probe_reports_the_nearest_sample() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);

    let probe = caff_ok(temp.path(), "absolute", &["probe", "08:00"]);
    assert_eq!(probe.trim(), "3/1 8AM • 80 mg");

    // One default half-life later the level has halved
    let probe = caff_ok(temp.path(), "absolute", &["probe", "13:00"]);
    assert_eq!(probe.trim(), "3/1 1PM • 40 mg");

    // Queries before the curve clamp to its first sample
    let probe = caff_ok(temp.path(), "absolute", &["probe", "01:00"]);
    assert_eq!(probe.trim(), "3/1 8AM • 80 mg");
}

#[test]
fn start_date_edit_preserves_offsets() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);
    caff_ok(temp.path(), "absolute", &["add", "--time", "14:00"]);
    // Regressing clock time lands on the next day
    caff_ok(temp.path(), "absolute", &["add", "--time", "07:00"]);

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("2024-03-02 07:00"), "rollover row:\n{status}");

    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-06-10"]);
    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("2024-06-10 08:00"), "anchor moved:\n{status}");
    assert!(status.contains("2024-06-10 14:00"), "same-day offset kept:\n{status}");
    assert!(status.contains("2024-06-11 07:00"), "next-day offset kept:\n{status}");
}

#[test]
fn relative_basis_infers_day_rollovers() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "relative", &["edit", "0", "--time", "09:00"]);
    caff_ok(temp.path(), "relative", &["add", "--time", "14:00"]);
    caff_ok(temp.path(), "relative", &["add", "--time", "08:00"]);

    let status = caff_ok(temp.path(), "relative", &["status"]);
    assert!(status.contains("day 0 09:00"), "first row pinned:\n{status}");
    assert!(status.contains("day 0 14:00"), "advancing time stays:\n{status}");
    assert!(status.contains("day 1 08:00"), "regression rolls over:\n{status}");

    let json = caff_ok(temp.path(), "relative", &["series", "--json"]);
    let output: serde_json::Value = serde_json::from_str(&json).unwrap();
    let samples = output["samples"].as_array().unwrap();

    // Coordinates run from 9.0 to 32.0 + 15h
    assert!((samples[0]["time"].as_f64().unwrap() - 9.0).abs() < 1e-9);
    assert!((samples.last().unwrap()["time"].as_f64().unwrap() - 47.0).abs() < 1e-9);
    assert_eq!(samples[0]["label"], "9AM");

    let probe = caff_ok(temp.path(), "relative", &["probe", "08:00", "--day", "1"]);
    assert!(probe.contains("8AM •"), "relative probe label:\n{probe}");
}

#[test]
fn duplicate_and_remove_rows() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);

    let duplicated = caff_ok(temp.path(), "absolute", &["duplicate", "0"]);
    assert!(duplicated.contains("80 mg"), "copy keeps the drink:\n{duplicated}");

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("09:00"), "copy is an hour later:\n{status}");

    caff_ok(temp.path(), "absolute", &["remove", "1"]);
    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(!status.contains("09:00"), "copy removed:\n{status}");

    // Removing a row that does not exist fails cleanly
    let output = caff(temp.path(), "absolute", &["remove", "42"]);
    assert!(!output.status.success());
}

#[test]
fn clear_resets_to_a_single_default_row() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);
    caff_ok(temp.path(), "absolute", &["add", "--time", "12:00"]);
    caff_ok(temp.path(), "absolute", &["set", "half-life", "custom", "--hours", "4"]);

    caff_ok(temp.path(), "absolute", &["clear"]);

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("08:00"), "back to the default row:\n{status}");
    assert!(!status.contains("12:00"), "added row gone:\n{status}");
    assert!(status.contains("Half-life:  5 h"), "half-life reset:\n{status}");
}

#[test]
fn custom_half_life_changes_the_curve() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);
    caff_ok(temp.path(), "absolute", &["set", "half-life", "custom", "--hours", "2.5"]);

    // One 2.5h half-life after the 08:00 default row
    let probe = caff_ok(temp.path(), "absolute", &["probe", "10:30"]);
    assert_eq!(probe.trim(), "3/1 10AM • 40 mg");
}

#[test]
fn empty_curve_prints_a_placeholder() {
    let temp = TempDir::new().unwrap();
    // Zero out the only row
    caff_ok(temp.path(), "absolute", &["edit", "0", "--drink", "custom"]);

    let series = caff_ok(temp.path(), "absolute", &["series"]);
    assert!(series.contains("No intakes to chart"), "placeholder:\n{series}");

    let probe = caff_ok(temp.path(), "absolute", &["probe", "08:00"]);
    assert!(probe.contains("No samples to probe"), "probe placeholder:\n{probe}");
}

#[test]
fn unreadable_snapshot_starts_fresh() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("snapshot.json"), "{broken").unwrap();

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    assert!(status.contains("80 mg"), "fresh default session:\n{status}");
}

#[test]
fn state_persists_across_invocations() {
    let temp = TempDir::new().unwrap();
    caff_ok(temp.path(), "absolute", &["set", "start-date", "2024-03-01"]);
    caff_ok(
        temp.path(),
        "absolute",
        &["add", "--time", "10:00", "--mg-per-100ml", "95", "--ml", "250"],
    );

    let status = caff_ok(temp.path(), "absolute", &["status"]);
    // round(95 / 100 * 250)
    assert!(status.contains("238 mg"), "custom row persisted:\n{status}");
    assert!(status.contains("Custom (95 mg/100ml)"), "custom drink shown:\n{status}");
}
