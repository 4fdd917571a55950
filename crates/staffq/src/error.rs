//! Error types for staffq operations.

use crate::domain::{DeptNo, EmpNo};
use std::io;
use thiserror::Error;

/// The error type for staffq operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset failed an integrity check.
    #[error("Integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),

    /// Result rows could not be written.
    #[error("Output error: {0}")]
    Output(#[from] staffq_ops::Error),

    /// Result rows could not be converted to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No report with this name exists.
    #[error("Unknown report: {0}")]
    UnknownReport(String),
}

/// A defect in the employee/department data.
///
/// These describe programming-time mistakes in fixture data, so the seed
/// provider reports them by panicking rather than returning them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// Two employees share a number.
    #[error("duplicate employee number {0}")]
    DuplicateEmployee(EmpNo),

    /// Two departments share a number.
    #[error("duplicate department number {0}")]
    DuplicateDepartment(DeptNo),

    /// A manager reference does not resolve.
    #[error("employee {employee} references unknown manager {manager}")]
    UnknownManager {
        /// The referencing employee
        employee: EmpNo,
        /// The missing manager
        manager: EmpNo,
    },

    /// A department reference does not resolve.
    #[error("employee {employee} references unknown department {department}")]
    UnknownDepartment {
        /// The referencing employee
        employee: EmpNo,
        /// The missing department
        department: DeptNo,
    },

    /// The manager relation loops back on itself.
    #[error("management chain through employee {0} forms a cycle")]
    ManagerCycle(EmpNo),
}

/// A specialized Result type for staffq operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_messages_name_the_records() {
        let err = Error::from(IntegrityViolation::UnknownManager {
            employee: EmpNo(7369),
            manager: EmpNo(9999),
        });
        assert_eq!(
            err.to_string(),
            "Integrity violation: employee 7369 references unknown manager 9999"
        );
    }
}
