//! Integration tests for the staffq CLI.
//!
//! These tests run the built binary end to end.

use rstest::rstest;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;
use common::{jsonl_rows, run_staffq, run_staffq_with_config, stdout_of};

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let stdout = stdout_of(&run_staffq(&["--help"]));
    assert!(stdout.contains("staffq"));
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let stdout = stdout_of(&run_staffq(&["--version"]));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn test_employees_text() {
    let stdout = stdout_of(&run_staffq(&["employees"]));
    assert!(stdout.starts_with("employees (6 rows)"));
    assert!(stdout.contains("name: KING"));
    assert!(!stdout.contains("\u{1b}["), "NO_COLOR must disable ANSI codes");
}

#[test]
fn test_departments_json() {
    let stdout = stdout_of(&run_staffq(&["--format", "json", "departments"]));
    let rows: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = rows.iter().filter_map(|r| r["name"].as_str()).collect();
    assert_eq!(names, ["ACCOUNTING", "RESEARCH", "SALES", "OPERATIONS"]);
}

#[test]
fn test_reports_lists_catalogue() {
    let rows = jsonl_rows(&stdout_of(&run_staffq(&["reports", "--format", "jsonl"])));
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().any(|r| r["report"] == "org-chart"));
}

// ============================================================================
// Report Tests
// ============================================================================

#[rstest]
#[case::hired("hired-in-year", 4)]
#[case::top("top-earners", 3)]
#[case::jobs("job-headcounts", 4)]
#[case::brackets("salary-brackets", 3)]
#[case::quartiles("salary-quartiles", 6)]
#[case::outearning("outearning-managers", 0)]
#[case::chart("org-chart", 1)]
fn test_report_row_counts(#[case] report: &str, #[case] expected: usize) {
    let rows = jsonl_rows(&stdout_of(&run_staffq(&["--format", "jsonl", "report", report])));
    assert_eq!(rows.len(), expected, "{report}");
}

#[test]
fn test_report_overrides() {
    let output = run_staffq(&["--format", "jsonl", "report", "hired-in-year", "--year", "1983"]);
    let rows = jsonl_rows(&stdout_of(&output));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "ADAMS");
}

#[test]
fn test_org_chart_root() {
    let stdout = stdout_of(&run_staffq(&["--format", "json", "report", "org-chart"]));
    let rows: Vec<Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["manager"], "KING");
    assert_eq!(rows[0]["direct_reports"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_unknown_report_fails() {
    let output = run_staffq(&["report", "bonus-pool"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bonus-pool"));
}

#[test]
fn test_empty_report_text() {
    let stdout = stdout_of(&run_staffq(&["report", "outearning-managers"]));
    assert!(stdout.contains("(no rows)"));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_file_changes_parameters() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "top-n: 1").unwrap();

    let output =
        run_staffq_with_config(config.path(), &["--format", "jsonl", "report", "top-earners"]);
    let rows = jsonl_rows(&stdout_of(&output));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "KING");
}

#[test]
fn test_config_custom_brackets() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "brackets:").unwrap();
    writeln!(config, "  - {{ name: Everyone, min: 0 }}").unwrap();

    let output =
        run_staffq_with_config(config.path(), &["--format", "jsonl", "report", "salary-brackets"]);
    let rows = jsonl_rows(&stdout_of(&output));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["bracket"], "Everyone");
    assert_eq!(rows[0]["count"], 6);
}

#[test]
fn test_unknown_config_key_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "bonus-rate: 0.5").unwrap();

    let output = run_staffq_with_config(config.path(), &["report", "total-salary"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bonus-rate"));
}

#[test]
fn test_oversized_raise_rate_is_a_config_error() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "raise-rate: 1.0e26").unwrap();

    let output = run_staffq_with_config(config.path(), &["report", "raise-budgets"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "{stderr}");
    assert!(stderr.contains("raise-rate"), "{stderr}");
}

#[test]
fn test_missing_config_fails() {
    let output = run_staffq(&["--config", "/nonexistent/staffq.yaml", "check"]);
    assert!(!output.status.success());
}

// ============================================================================
// Check Tests
// ============================================================================

#[test]
fn test_check_summary() {
    let rows = jsonl_rows(&stdout_of(&run_staffq(&["--format", "jsonl", "check"])));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "ok");
    assert_eq!(rows[0]["employees"], 6);
    assert_eq!(rows[0]["departments"], 4);
    assert_eq!(rows[0]["roots"], serde_json::json!(["KING"]));
}
