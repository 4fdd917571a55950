//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Every
//! command renders its result as rows through [`output::write_rows`].

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};

use super::args::ReportArgs;
use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::output::{self, OutputConfig, OutputMode};
use crate::reports::{self, ReportKind};

/// Loads the report configuration from `path`, or the defaults when no
/// path was given.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(ReportConfig::default()),
    }
}

fn serialize_rows<T: Serialize>(rows: &[T]) -> Result<Vec<Value>> {
    rows.iter()
        .map(|row| serde_json::to_value(row).context("Failed to serialize row"))
        .collect()
}

fn emit(title: &str, rows: &[Value], output_mode: OutputMode) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_rows(&mut out, title, rows, output_mode, &OutputConfig::from_env())?;
    out.flush()?;
    Ok(())
}

/// Execute the employees command
pub fn execute_employees(output_mode: OutputMode) -> Result<()> {
    let rows = serialize_rows(Dataset::seed().employees())?;
    emit("employees", &rows, output_mode)
}

/// Execute the departments command
pub fn execute_departments(output_mode: OutputMode) -> Result<()> {
    let rows = serialize_rows(Dataset::seed().departments())?;
    emit("departments", &rows, output_mode)
}

/// Execute the report command
pub fn execute_report(
    args: &ReportArgs,
    config_path: Option<&Path>,
    output_mode: OutputMode,
) -> Result<()> {
    let config = args.apply(load_config(config_path)?);
    config.validate()?;

    let rows = reports::run(args.kind, Dataset::seed(), &config)
        .with_context(|| format!("Failed to run report {}", args.kind))?;
    emit(args.kind.name(), &rows, output_mode)
}

/// Execute the reports command
pub fn execute_reports(output_mode: OutputMode) -> Result<()> {
    let rows: Vec<Value> = ReportKind::ALL
        .iter()
        .map(|kind| json!({ "report": kind.name() }))
        .collect();
    emit("reports", &rows, output_mode)
}

/// Execute the check command
///
/// Rebuilds the seed from scratch so integrity violations surface as an
/// error instead of a panic.
pub fn execute_check(config_path: Option<&Path>, output_mode: OutputMode) -> Result<()> {
    let config = load_config(config_path)?;
    let dataset = Dataset::build_seed().context("Seed dataset failed validation")?;
    let roots: Vec<&str> = dataset
        .org_graph()
        .roots()
        .into_iter()
        .map(|e| e.name.as_str())
        .collect();

    tracing::debug!(brackets = config.brackets.len(), "configuration accepted");

    let row = json!({
        "employees": dataset.employees().len(),
        "departments": dataset.departments().len(),
        "roots": roots,
        "status": "ok",
    });
    emit("check", &[row], output_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_config_defaults() {
        assert_eq!(load_config(None).unwrap(), ReportConfig::default());
    }

    #[test]
    fn config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hire-year: 1983").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.hire_year, 1983);
    }

    #[test]
    fn unreadable_config_names_the_path() {
        let err = load_config(Some(Path::new("/nonexistent/staffq.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/staffq.yaml"));
    }

    #[test]
    fn employees_serialize_one_row_each() {
        let rows = serialize_rows(Dataset::seed().employees()).unwrap();
        assert_eq!(rows.len(), Dataset::seed().employees().len());
        assert!(rows.iter().all(Value::is_object));
    }
}
