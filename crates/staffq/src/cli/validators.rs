//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::reports::ReportKind;
use chrono::NaiveDate;

/// Validate a report name.
///
/// Accepts the kebab-case names listed by `staffq reports`; surrounding
/// whitespace and case are ignored.
pub fn validate_report(s: &str) -> Result<ReportKind, String> {
    let name = s.trim().to_ascii_lowercase();
    name.parse::<ReportKind>().map_err(|_| {
        format!("Unknown report '{name}'. Run `staffq reports` to list available reports")
    })
}

/// Validate a calendar date in `YYYY-MM-DD` form.
pub fn validate_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {e}. Expected YYYY-MM-DD", s.trim()))
}

/// Validate a single letter to search names for.
pub fn validate_letter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(format!("Expected a single letter, got '{s}'")),
    }
}
