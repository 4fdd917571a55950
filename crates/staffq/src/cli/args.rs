//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use chrono::NaiveDate;
use clap::Parser;

use super::validators::{validate_date, validate_letter, validate_report};
use crate::config::ReportConfig;
use crate::reports::ReportKind;

/// Arguments for the `report` command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Report to run (see `staffq reports`)
    #[arg(value_parser = validate_report)]
    pub kind: ReportKind,

    /// Hire year for `hired-in-year`
    #[arg(long)]
    pub year: Option<i32>,

    /// Number of rows for `top-earners`
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: Option<u16>,

    /// Letter for `names-containing`
    #[arg(long, value_parser = validate_letter)]
    pub letter: Option<char>,

    /// Reference date for `average-tenure` (YYYY-MM-DD)
    #[arg(long, value_parser = validate_date)]
    pub reference_date: Option<NaiveDate>,

    /// Maximum gap in days for `close-hires`
    #[arg(long, value_parser = clap::value_parser!(u32))]
    pub days: Option<u32>,
}

impl ReportArgs {
    /// Applies the command-line overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(year) = self.year {
            config.hire_year = year;
        }
        if let Some(top) = self.top {
            config.top_n = usize::from(top);
        }
        if let Some(letter) = self.letter {
            config.name_letter = letter;
        }
        if let Some(date) = self.reference_date {
            config.reference_date = date;
        }
        if let Some(days) = self.days {
            config.close_hire_days = i64::from(days);
        }
        config
    }
}
