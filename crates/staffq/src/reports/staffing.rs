//! Headcount and staffing-structure reports.

use crate::domain::{EmpNo, Employee};
use serde::Serialize;
use staffq_ops::{Direction, Query};
use std::collections::HashSet;

/// Headcount for one job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCount {
    /// Job title
    pub job: String,
    /// Number of employees holding it
    pub count: usize,
}

/// Employees hired during `year`.
#[must_use]
pub fn hired_in_year(employees: &[Employee], year: i32) -> Vec<&Employee> {
    Query::over(employees)
        .filter(|e| e.hire_year() == year)
        .into_vec()
}

/// Employees whose name contains `letter`.
#[must_use]
pub fn names_containing(employees: &[Employee], letter: char) -> Vec<&Employee> {
    Query::over(employees)
        .filter(|e| e.name.contains(letter))
        .into_vec()
}

/// Headcount per job, largest first.
#[must_use]
pub fn job_headcounts(employees: &[Employee]) -> Vec<JobCount> {
    Query::over(employees)
        .group_by(|e| e.job.clone())
        .select(|g| JobCount {
            count: g.count(),
            job: g.key,
        })
        .order_by_key(|row| row.count, Direction::Descending)
        .into_vec()
}

fn manager_ids(employees: &[Employee]) -> HashSet<EmpNo> {
    Query::over(employees)
        .select_many(|e| e.manager)
        .distinct()
        .into_iter()
        .collect()
}

/// Employees that at least one other employee reports to.
#[must_use]
pub fn managers(employees: &[Employee]) -> Vec<&Employee> {
    let ids = manager_ids(employees);
    Query::over(employees)
        .filter(|e| ids.contains(&e.emp_no))
        .into_vec()
}

/// Share of employees that manage someone; `0.0` for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn manager_ratio(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        return 0.0;
    }
    managers(employees).len() as f64 / employees.len() as f64
}

/// Job titles held in more than one department, in first-seen order.
#[must_use]
pub fn jobs_spanning_departments(employees: &[Employee]) -> Vec<String> {
    Query::over(employees)
        .group_by(|e| e.job.clone())
        .filter(|g| g.distinct_count_by(|e| e.dept_no) > 1)
        .select(|g| g.key)
        .into_vec()
}

/// Names whose character count equals the longest one.
#[must_use]
pub fn longest_names(employees: &[Employee]) -> Vec<&str> {
    let query = Query::over(employees);
    let Some(longest) = query.max_by(|e| e.name.chars().count()) else {
        return Vec::new();
    };
    query
        .filter(|e| e.name.chars().count() == longest)
        .select(|e| e.name.as_str())
        .into_vec()
}
