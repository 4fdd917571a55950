//! Staffq - relational queries over an employee/department dataset.
//!
//! This crate provides the data model, the validated seed fixture, the
//! management hierarchy and a catalogue of reports built on the
//! [`staffq_ops`] operators, plus the CLI that runs them.
//!
//! # Example
//!
//! ```
//! use staffq::reports::payroll;
//!
//! let total = payroll::total_salary(staffq::get_employees());
//! assert_eq!(total.to_string(), "13650");
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod hierarchy;
pub mod reports;

// Public CLI module (needed by binary)
pub mod cli;
pub mod output;

pub use dataset::{Dataset, get_departments, get_employees};
pub use error::{Error, Result};
