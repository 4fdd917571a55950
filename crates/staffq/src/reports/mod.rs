//! The report catalogue.
//!
//! Each report is a pure function over the dataset's slices returning
//! typed rows. [`ReportKind`] names them so callers such as the CLI can run
//! any report by name and receive JSON rows.

pub mod payroll;
pub mod staffing;
pub mod tenure;

use crate::config::ReportConfig;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

/// Every report the catalogue can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Employees hired in the configured year
    HiredInYear,
    /// Best-paid employees
    TopEarners,
    /// Headcount per job
    JobHeadcounts,
    /// Names containing the configured letter
    NamesContaining,
    /// Sum of all salaries
    TotalSalary,
    /// Department with the highest mean salary
    HighestAverageDepartment,
    /// Employees managing someone
    Managers,
    /// Employees paid more than their manager
    OutearningManagers,
    /// Mean years of service
    AverageTenure,
    /// Headcount per salary bracket
    SalaryBrackets,
    /// Consecutive hires close together
    CloseHires,
    /// Commission as a share of salary
    CommissionPercentages,
    /// Jobs held in several departments
    JobsSpanningDepartments,
    /// Longest employee names
    LongestNames,
    /// Managers per employee
    ManagerRatio,
    /// Salary quartile per employee
    SalaryQuartiles,
    /// Raise budget per department
    RaiseBudgets,
    /// Salary spread per department
    SalaryDisparities,
    /// Two-level organization chart
    OrgChart,
    /// Cost per head per department
    DepartmentEfficiency,
}

impl ReportKind {
    /// All reports in catalogue order.
    pub const ALL: [ReportKind; 20] = [
        Self::HiredInYear,
        Self::TopEarners,
        Self::JobHeadcounts,
        Self::NamesContaining,
        Self::TotalSalary,
        Self::HighestAverageDepartment,
        Self::Managers,
        Self::OutearningManagers,
        Self::AverageTenure,
        Self::SalaryBrackets,
        Self::CloseHires,
        Self::CommissionPercentages,
        Self::JobsSpanningDepartments,
        Self::LongestNames,
        Self::ManagerRatio,
        Self::SalaryQuartiles,
        Self::RaiseBudgets,
        Self::SalaryDisparities,
        Self::OrgChart,
        Self::DepartmentEfficiency,
    ];

    /// Kebab-case name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HiredInYear => "hired-in-year",
            Self::TopEarners => "top-earners",
            Self::JobHeadcounts => "job-headcounts",
            Self::NamesContaining => "names-containing",
            Self::TotalSalary => "total-salary",
            Self::HighestAverageDepartment => "highest-average-department",
            Self::Managers => "managers",
            Self::OutearningManagers => "outearning-managers",
            Self::AverageTenure => "average-tenure",
            Self::SalaryBrackets => "salary-brackets",
            Self::CloseHires => "close-hires",
            Self::CommissionPercentages => "commission-percentages",
            Self::JobsSpanningDepartments => "jobs-spanning-departments",
            Self::LongestNames => "longest-names",
            Self::ManagerRatio => "manager-ratio",
            Self::SalaryQuartiles => "salary-quartiles",
            Self::RaiseBudgets => "raise-budgets",
            Self::SalaryDisparities => "salary-disparities",
            Self::OrgChart => "org-chart",
            Self::DepartmentEfficiency => "department-efficiency",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownReport(s.to_string()))
    }
}

fn to_rows<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<Vec<Value>> {
    rows.into_iter()
        .map(|row| serde_json::to_value(row).map_err(Error::from))
        .collect()
}

/// Runs one report against `dataset` and returns its rows as JSON values.
///
/// Scalar reports return a single object row.
///
/// # Errors
///
/// Returns [`Error::Json`] if a row cannot be converted to JSON.
pub fn run(kind: ReportKind, dataset: &Dataset, config: &ReportConfig) -> Result<Vec<Value>> {
    let employees = dataset.employees();
    let departments = dataset.departments();

    let rows = match kind {
        ReportKind::HiredInYear => to_rows(staffing::hired_in_year(employees, config.hire_year))?,
        ReportKind::TopEarners => to_rows(payroll::top_earners(employees, config.top_n))?,
        ReportKind::JobHeadcounts => to_rows(staffing::job_headcounts(employees))?,
        ReportKind::NamesContaining => {
            to_rows(staffing::names_containing(employees, config.name_letter))?
        }
        ReportKind::TotalSalary => {
            vec![json!({ "total_salary": payroll::total_salary(employees) })]
        }
        ReportKind::HighestAverageDepartment => {
            to_rows(payroll::highest_average_department(employees))?
        }
        ReportKind::Managers => to_rows(staffing::managers(employees))?,
        ReportKind::OutearningManagers => to_rows(
            payroll::outearning_managers(employees)
                .into_iter()
                .map(|name| json!({ "name": name })),
        )?,
        ReportKind::AverageTenure => vec![json!({
            "reference_date": config.reference_date,
            "average_years": tenure::average_tenure_years(employees, config.reference_date),
        })],
        ReportKind::SalaryBrackets => {
            to_rows(payroll::salary_brackets(employees, &config.brackets))?
        }
        ReportKind::CloseHires => {
            to_rows(tenure::close_hires(employees, config.close_hire_days))?
        }
        ReportKind::CommissionPercentages => to_rows(payroll::commission_percentages(employees))?,
        ReportKind::JobsSpanningDepartments => to_rows(
            staffing::jobs_spanning_departments(employees)
                .into_iter()
                .map(|job| json!({ "job": job })),
        )?,
        ReportKind::LongestNames => to_rows(
            staffing::longest_names(employees)
                .into_iter()
                .map(|name| json!({ "name": name })),
        )?,
        ReportKind::ManagerRatio => {
            vec![json!({ "manager_ratio": staffing::manager_ratio(employees) })]
        }
        ReportKind::SalaryQuartiles => to_rows(payroll::salary_quartiles(employees))?,
        ReportKind::RaiseBudgets => to_rows(payroll::raise_budgets(
            departments,
            employees,
            config.raise_rate,
        ))?,
        ReportKind::SalaryDisparities => to_rows(payroll::salary_disparities(employees))?,
        ReportKind::OrgChart => to_rows(dataset.org_graph().chart())?,
        ReportKind::DepartmentEfficiency => to_rows(payroll::department_efficiency(
            departments,
            employees,
            config.efficiency_base,
        ))?,
    };

    tracing::debug!(report = %kind, rows = rows.len(), "report executed");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.name().parse::<ReportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "payroll-magic".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownReport(name) if name == "payroll-magic"));
    }

    #[test]
    fn every_report_runs_on_the_seed() {
        let config = ReportConfig::default();
        for kind in ReportKind::ALL {
            let rows = run(kind, Dataset::seed(), &config).unwrap();
            if kind == ReportKind::OutearningManagers {
                assert!(rows.is_empty());
            } else {
                assert!(!rows.is_empty(), "{kind} returned no rows");
            }
        }
    }

    #[rstest]
    #[case::scalar(ReportKind::TotalSalary, "total_salary")]
    #[case::ratio(ReportKind::ManagerRatio, "manager_ratio")]
    #[case::tenure(ReportKind::AverageTenure, "average_years")]
    fn scalar_reports_are_single_rows(#[case] kind: ReportKind, #[case] field: &str) {
        let rows = run(kind, Dataset::seed(), &ReportConfig::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].get(field).is_some());
    }
}
