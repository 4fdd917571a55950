//! Domain types for the employee/department dataset.
//!
//! Records are plain immutable values. Identifiers are newtypes so that an
//! employee number can never be passed where a department number is meant.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmpNo(pub u32);

impl fmt::Display for EmpNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmpNo {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Unique identifier for a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeptNo(pub u32);

impl fmt::Display for DeptNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeptNo {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee number
    pub emp_no: EmpNo,

    /// Employee name
    pub name: String,

    /// Job title
    pub job: String,

    /// Manager, absent for organizational roots
    pub manager: Option<EmpNo>,

    /// Date of hire
    pub hire_date: NaiveDate,

    /// Monthly salary
    pub salary: Decimal,

    /// Commission, absent when the employee earns none
    pub commission: Option<Decimal>,

    /// Department the employee belongs to
    pub dept_no: DeptNo,
}

impl Employee {
    /// Calendar year of the hire date.
    #[must_use]
    pub fn hire_year(&self) -> i32 {
        self.hire_date.year()
    }

    /// Whether this employee has no manager.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.manager.is_none()
    }

    /// Whether this employee reports to `manager`.
    #[must_use]
    pub fn reports_to(&self, manager: EmpNo) -> bool {
        self.manager == Some(manager)
    }
}

/// A department record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department number
    pub dept_no: DeptNo,

    /// Department name
    pub name: String,

    /// Office location
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn employee(manager: Option<u32>) -> Employee {
        Employee {
            emp_no: EmpNo(1),
            name: "TEST".to_string(),
            job: "CLERK".to_string(),
            manager: manager.map(EmpNo),
            hire_date: NaiveDate::from_ymd_opt(1981, 6, 9).unwrap(),
            salary: dec!(1000),
            commission: None,
            dept_no: DeptNo(10),
        }
    }

    #[test]
    fn ids_display_as_numbers() {
        assert_eq!(EmpNo(7839).to_string(), "7839");
        assert_eq!(DeptNo::from(10).to_string(), "10");
    }

    #[test]
    fn root_and_reporting_line() {
        assert!(employee(None).is_root());
        let report = employee(Some(7839));
        assert!(!report.is_root());
        assert!(report.reports_to(EmpNo(7839)));
        assert!(!report.reports_to(EmpNo(7902)));
    }

    #[test]
    fn hire_year_comes_from_date() {
        assert_eq!(employee(None).hire_year(), 1981);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&employee(Some(7839))).unwrap();
        assert!(json.contains("\"emp_no\":1"));
        assert!(json.contains("\"manager\":7839"));
        assert!(json.contains("\"commission\":null"));
    }
}
