//! The frozen employee/department fixture.
//!
//! A [`Dataset`] is validated once at construction and immutable after
//! that. The process-wide seed is built lazily on first access; a malformed
//! seed is a programming defect and aborts with the violation report.

use crate::domain::{Department, DeptNo, EmpNo, Employee};
use crate::error::{IntegrityViolation, Result};
use crate::hierarchy::OrgGraph;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::LazyLock;

static SEED: LazyLock<Dataset> = LazyLock::new(|| {
    Dataset::build_seed().unwrap_or_else(|err| panic!("seed fixture is malformed: {err}"))
});

/// All seed employees. Every call yields the same data.
#[must_use]
pub fn get_employees() -> &'static [Employee] {
    SEED.employees()
}

/// All seed departments. Every call yields the same data.
#[must_use]
pub fn get_departments() -> &'static [Department] {
    SEED.departments()
}

/// Validated, immutable employee and department collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    employees: Vec<Employee>,
    departments: Vec<Department>,
}

impl Dataset {
    /// Validates and freezes the given records.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Integrity`] for the first violation found, checked in
    /// this order: duplicate department numbers, duplicate employee
    /// numbers, unknown departments, unknown managers, management cycles.
    pub fn new(employees: Vec<Employee>, departments: Vec<Department>) -> Result<Self> {
        let mut dept_nos = HashSet::with_capacity(departments.len());
        for dept in &departments {
            if !dept_nos.insert(dept.dept_no) {
                return Err(IntegrityViolation::DuplicateDepartment(dept.dept_no).into());
            }
        }

        let mut emp_nos = HashSet::with_capacity(employees.len());
        for employee in &employees {
            if !emp_nos.insert(employee.emp_no) {
                return Err(IntegrityViolation::DuplicateEmployee(employee.emp_no).into());
            }
        }

        if let Some(employee) = employees.iter().find(|e| !dept_nos.contains(&e.dept_no)) {
            return Err(IntegrityViolation::UnknownDepartment {
                employee: employee.emp_no,
                department: employee.dept_no,
            }
            .into());
        }

        let graph = OrgGraph::build(&employees)?;
        if let Some(emp_no) = graph.find_cycle() {
            return Err(IntegrityViolation::ManagerCycle(emp_no).into());
        }

        tracing::debug!(
            employees = employees.len(),
            departments = departments.len(),
            "dataset validated"
        );

        Ok(Self {
            employees,
            departments,
        })
    }

    /// Builds a fresh copy of the seed fixture, reporting violations
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Integrity`] if the seed records are malformed.
    pub fn build_seed() -> Result<Self> {
        Self::new(seed_employees(), seed_departments())
    }

    /// The process-wide seed fixture.
    #[must_use]
    pub fn seed() -> &'static Dataset {
        &SEED
    }

    /// Employees in fixture order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Departments in fixture order.
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Looks up an employee by number.
    #[must_use]
    pub fn employee(&self, emp_no: EmpNo) -> Option<&Employee> {
        self.employees.iter().find(|e| e.emp_no == emp_no)
    }

    /// Looks up a department by number.
    #[must_use]
    pub fn department(&self, dept_no: DeptNo) -> Option<&Department> {
        self.departments.iter().find(|d| d.dept_no == dept_no)
    }

    /// The reporting-line graph over this dataset's employees.
    #[must_use]
    pub fn org_graph(&self) -> OrgGraph<'_> {
        // Validated in `new`, so every manager resolves.
        OrgGraph::build(&self.employees)
            .unwrap_or_else(|err| unreachable!("validated dataset failed to rebuild: {err}"))
    }
}

fn seed_departments() -> Vec<Department> {
    [
        (10, "ACCOUNTING", "NEW YORK"),
        (20, "RESEARCH", "DALLAS"),
        (30, "SALES", "CHICAGO"),
        (40, "OPERATIONS", "BOSTON"),
    ]
    .into_iter()
    .map(|(no, name, location)| Department {
        dept_no: DeptNo(no),
        name: name.to_string(),
        location: location.to_string(),
    })
    .collect()
}

type SeedRow = (
    u32,
    &'static str,
    &'static str,
    Option<u32>,
    (i32, u32, u32),
    Decimal,
    Option<Decimal>,
    u32,
);

fn seed_employees() -> Vec<Employee> {
    let rows: [SeedRow; 6] = [
        (7369, "SMITH", "CLERK", Some(7902), (1980, 12, 17), dec!(800), None, 20),
        (7499, "ALLEN", "SALESMAN", Some(7839), (1981, 2, 20), dec!(1600), Some(dec!(300)), 30),
        (7521, "WARD", "SALESMAN", Some(7839), (1981, 2, 22), dec!(1250), Some(dec!(500)), 30),
        (7839, "KING", "PRESIDENT", None, (1981, 11, 17), dec!(5000), None, 10),
        (7902, "FORD", "ANALYST", Some(7839), (1981, 12, 3), dec!(3000), None, 20),
        (7876, "ADAMS", "CLERK", Some(7902), (1983, 1, 12), dec!(2000), None, 40),
    ];

    rows.into_iter()
        .map(
            |(no, name, job, manager, (y, m, d), salary, commission, dept)| Employee {
                emp_no: EmpNo(no),
                name: name.to_string(),
                job: job.to_string(),
                manager: manager.map(EmpNo),
                hire_date: NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap_or_else(|| panic!("seed hire date {y}-{m}-{d} for {name} is invalid")),
                salary,
                commission,
                dept_no: DeptNo(dept),
            },
        )
        .collect()
}
