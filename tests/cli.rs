//! Command-line behavior of `generate-test-summary`

mod fixtures;

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-test-summary"))
}

#[test]
fn test_writes_summary_and_reports_path() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let result = bin()
        .arg(fixtures::report("single_suite.xml"))
        .arg(fixtures::report("coverage_totals.json"))
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Test summary written to"));
    assert!(stdout.contains("summary.json"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["tests"]["total"], 10);
    assert_eq!(json["coverage"]["percentage"], 87.7);
}

#[test]
fn test_dash_skips_coverage() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let result = bin()
        .arg(fixtures::report("multi_suite.xml"))
        .arg("-")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["coverage"]["enabled"], false);
}

#[test]
fn test_missing_coverage_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let result = bin()
        .arg(fixtures::report("single_suite.xml"))
        .arg(dir.path().join("no-such-coverage.json"))
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(output.exists());
}

#[test]
fn test_missing_junit_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let result = bin()
        .arg(dir.path().join("absent.xml"))
        .arg("-")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("JUnit XML file not found"));
    assert!(!output.exists());
}

#[test]
fn test_too_few_arguments_prints_usage() {
    let result = bin().arg("junit.xml").output().unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
}

#[test]
fn test_malformed_junit_still_writes_summary() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("summary.json");

    let result = bin()
        .arg(fixtures::report("malformed.xml"))
        .arg("-")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Error parsing JUnit XML"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["tests"], serde_json::json!({}));
    assert_eq!(json["success"], false);
}
