//! Report parameters and their YAML configuration file.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```yaml
//! reference-date: 2024-06-30
//! raise-rate: 0.03
//! brackets:
//!   - { name: Entry, min: 0, max: 1500 }
//!   - { name: Senior, min: 1500 }
//! ```

use crate::error::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named salary range.
///
/// The lower bound is exclusive and the upper bound inclusive; a missing
/// upper bound is open-ended. Ranges may leave gaps (the defaults skip
/// `(1000, 1001]` and `(3000, 3001]`), and salaries in a gap belong to no
/// bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalaryBracket {
    /// Bracket label
    pub name: String,

    /// Exclusive lower bound
    pub min: Decimal,

    /// Inclusive upper bound, unbounded when absent
    #[serde(default)]
    pub max: Option<Decimal>,
}

impl SalaryBracket {
    /// Creates a bracket.
    pub fn new(name: impl Into<String>, min: Decimal, max: Option<Decimal>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Whether `salary` falls in `(min, max]`.
    #[must_use]
    pub fn contains(&self, salary: Decimal) -> bool {
        salary > self.min && self.max.is_none_or(|max| salary <= max)
    }
}

/// Parameters for the report catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ReportConfig {
    /// Date tenure is measured up to
    pub reference_date: NaiveDate,

    /// Year selected by the hired-in-year report
    pub hire_year: i32,

    /// Number of rows in the top-earners report
    pub top_n: usize,

    /// Letter searched for by the names-containing report
    pub name_letter: char,

    /// Largest gap, in days, between hires counted as close
    pub close_hire_days: i64,

    /// Fraction of payroll set aside for raises
    pub raise_rate: Decimal,

    /// Numerator of the efficiency rating (`base / average salary`)
    pub efficiency_base: Decimal,

    /// Salary brackets, checked in order
    pub brackets: Vec<SalaryBracket>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap_or_else(|| unreachable!("2023-01-01 is a valid date")),
            hire_year: 1981,
            top_n: 3,
            name_letter: 'I',
            close_hire_days: 3,
            raise_rate: dec!(0.05),
            efficiency_base: dec!(1000),
            brackets: default_brackets(),
        }
    }
}

/// The Low/Medium/High brackets used when no config overrides them.
#[must_use]
pub fn default_brackets() -> Vec<SalaryBracket> {
    vec![
        SalaryBracket::new("Low", dec!(0), Some(dec!(1000))),
        SalaryBracket::new("Medium", dec!(1001), Some(dec!(3000))),
        SalaryBracket::new("High", dec!(3001), None),
    ]
}

impl ReportConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read, does not parse,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded report configuration");
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed YAML or invalid values.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))
    }

    /// Checks values that would make reports meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::Config("top-n must be at least 1".to_string()));
        }
        if self.close_hire_days < 0 {
            return Err(Error::Config(
                "close-hire-days must not be negative".to_string(),
            ));
        }
        if self.efficiency_base.is_zero() {
            return Err(Error::Config("efficiency-base must not be zero".to_string()));
        }
        if self.raise_rate.is_sign_negative() {
            return Err(Error::Config("raise-rate must not be negative".to_string()));
        }
        if self.raise_rate > Decimal::ONE {
            return Err(Error::Config("raise-rate must not exceed 1".to_string()));
        }
        for bracket in &self.brackets {
            if bracket.max.is_some_and(|max| max <= bracket.min) {
                return Err(Error::Config(format!(
                    "bracket {} has max not above min",
                    bracket.name
                )));
            }
        }
        Ok(())
    }
}
