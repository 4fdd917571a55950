//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for staffq using clap's derive API.
//!
//! # Commands
//!
//! - `employees`: List the seed employees
//! - `departments`: List the seed departments
//! - `report`: Run one report from the catalogue
//! - `reports`: List report names
//! - `check`: Validate the seed dataset and configuration
//!
//! # Global Flags
//!
//! - `--format`: `text` (default), `json` or `jsonl`
//! - `--config`: YAML file with report parameters
//!
//! # Example
//!
//! ```bash
//! staffq report top-earners --top 5
//! staffq --format jsonl report salary-quartiles
//! staffq --config staffq.yaml report salary-brackets
//! ```

mod args;
mod execute;
mod types;
mod validators;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputMode;

pub use args::ReportArgs;
pub use types::FormatArg;
pub use validators::{validate_date, validate_letter, validate_report};

/// Staffq - relational queries over an employee/department dataset
///
/// Runs reports such as top earners, salary quartiles and the organization
/// chart over a frozen seed dataset.
#[derive(Parser, Debug)]
#[command(name = "staffq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// YAML file with report parameters
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the seed employees
    Employees,

    /// List the seed departments
    Departments,

    /// Run a report
    ///
    /// Parameters come from the configuration file (or defaults) and may be
    /// overridden per run with the flags below.
    Report(ReportArgs),

    /// List available reports
    Reports,

    /// Validate the seed dataset
    ///
    /// Checks referential integrity and the management hierarchy, loads the
    /// configuration if one was given, and prints a summary.
    Check,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, report evaluation or
    /// writing to stdout fails.
    pub fn execute(&self) -> Result<()> {
        let output_mode: OutputMode = self.format.into();
        let config = self.config.as_deref();

        match &self.command {
            Commands::Employees => execute::execute_employees(output_mode),
            Commands::Departments => execute::execute_departments(output_mode),
            Commands::Report(args) => execute::execute_report(args, config, output_mode),
            Commands::Reports => execute::execute_reports(output_mode),
            Commands::Check => execute::execute_check(config, output_mode),
        }
    }
}
