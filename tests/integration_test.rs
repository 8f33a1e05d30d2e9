//! Integration tests for the pto-accrual CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given schedule file and return stdout
fn run_forecast(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("pto-accrual").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn last_balance(output: &str) -> String {
    output
        .lines()
        .last()
        .and_then(|line| line.split(',').nth(2))
        .unwrap()
        .to_string()
}

#[test]
fn test_two_segments_matches_expected() {
    let output = run_forecast(&test_data_path("two_segments.csv"));
    let expected = fs::read_to_string(test_data_path("expected_two_segments.csv")).unwrap();

    let output_lines: Vec<&str> = output.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    assert_eq!(output_lines, expected_lines);
}

#[test]
fn test_single_segment_with_messy_formatting() {
    let output = run_forecast(&test_data_path("single_segment.csv"));

    // Header + 26 periods
    assert_eq!(output.lines().count(), 27);
    assert!(output.contains("1,2023-02-10,5.85"));
    assert_eq!(last_balance(&output), "152.10");
}

#[test]
fn test_bad_rows_are_skipped() {
    let output = run_forecast(&test_data_path("bad_rows.csv"));
    assert_eq!(last_balance(&output), "144.10");
}

#[test]
fn test_output_has_correct_header() {
    let output = run_forecast(&test_data_path("two_segments.csv"));
    assert!(output.starts_with("period,date,balance"));
}

#[test]
fn test_negative_balance_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type,start,end,length,hours").unwrap();
    writeln!(file, "start,2023-01-27,,,0").unwrap();
    writeln!(file, "period,2023-01-27,2023-02-20,14,5.85").unwrap();
    writeln!(file, "vacation,2023-01-01,,,40").unwrap();

    let output = run_forecast(file.path().to_str().unwrap());
    assert!(output.contains("1,2023-02-10,-34.15"));
}

#[test]
fn test_out_of_range_rows_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type,start,end,length,hours").unwrap();
    writeln!(file, "start,2023-01-27,,,0").unwrap();
    writeln!(file, "period,2023-01-27,+262142-12-31,14,5.85").unwrap();
    writeln!(file, "period,2023-01-27,2023-12-31,14,5.85").unwrap();
    writeln!(file, "vacation,2023-03-06,,,79228162514264337593543950335").unwrap();

    let output = run_forecast(file.path().to_str().unwrap());

    // Header + 26 periods from the one valid segment, no deduction
    assert_eq!(output.lines().count(), 27);
    assert_eq!(last_balance(&output), "152.10");
}

#[test]
fn test_schedule_without_periods_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type,start,end,length,hours").unwrap();
    writeln!(file, "start,2023-01-27,,,10").unwrap();

    let mut cmd = Command::cargo_bin("pto-accrual").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no accruement periods"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("pto-accrual").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("pto-accrual").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}
