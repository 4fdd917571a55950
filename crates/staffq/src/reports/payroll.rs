//! Salary, commission and per-department payroll reports.
//!
//! Derived percentages and ratios are rounded half-away-from-zero to two
//! decimal places. Rows whose divisor would be zero are left out rather
//! than reported as infinite.

use crate::config::SalaryBracket;
use crate::domain::{Department, DeptNo, Employee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use staffq_ops::{Direction, Query, round_half_away};

/// Mean salary of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAverage {
    /// Department number
    pub dept_no: DeptNo,
    /// Mean salary of its employees
    pub average_salary: Decimal,
}

/// Commission as a share of salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommissionShare {
    /// Employee name
    pub name: String,
    /// Salary
    pub salary: Decimal,
    /// Commission
    pub commission: Decimal,
    /// `commission / salary * 100`, two decimal places
    pub percentage: Decimal,
}

/// Number of employees in one salary bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketCount {
    /// Bracket label
    pub bracket: String,
    /// Employees whose salary falls in it
    pub count: usize,
}

/// An employee's salary quartile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuartileRow {
    /// Employee name
    pub name: String,
    /// Salary
    pub salary: Decimal,
    /// Quartile label, 1 to 4
    pub quartile: u8,
}

/// Raise budget for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaiseBudget {
    /// Department number
    pub dept_no: DeptNo,
    /// Department name
    pub department: String,
    /// Sum of salaries
    pub total_salary: Decimal,
    /// `total_salary * rate`
    pub increase_budget: Decimal,
}

/// Spread between the best and worst paid in a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryDisparity {
    /// Department number
    pub dept_no: DeptNo,
    /// Highest salary
    pub max_salary: Decimal,
    /// Lowest salary
    pub min_salary: Decimal,
    /// `max_salary / min_salary`, two decimal places
    pub ratio: Decimal,
}

/// Payroll cost per head for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentEfficiency {
    /// Department number
    pub dept_no: DeptNo,
    /// Department name
    pub department: String,
    /// Number of employees
    pub employee_count: usize,
    /// Sum of salaries
    pub total_salary: Decimal,
    /// Mean salary
    pub average_salary: Decimal,
    /// `base / average_salary`, two decimal places; higher means cheaper per head
    pub efficiency_rating: Decimal,
}

/// The `n` best-paid employees, highest first.
#[must_use]
pub fn top_earners(employees: &[Employee], n: usize) -> Vec<&Employee> {
    Query::over(employees)
        .order_by_key(|e| e.salary, Direction::Descending)
        .take(n)
        .into_vec()
}

/// Sum of all salaries.
#[must_use]
pub fn total_salary(employees: &[Employee]) -> Decimal {
    Query::over(employees).sum_by(|e| e.salary)
}

/// The department with the highest mean salary.
///
/// On a tie the department seen first in `employees` wins.
#[must_use]
pub fn highest_average_department(employees: &[Employee]) -> Option<DepartmentAverage> {
    Query::over(employees)
        .group_by(|e| e.dept_no)
        .select_many(|g| {
            g.average_by(|e| e.salary).map(|average_salary| DepartmentAverage {
                dept_no: g.key,
                average_salary,
            })
        })
        .order_by_key(|row| row.average_salary, Direction::Descending)
        .first()
}

/// Names of employees paid more than their own manager.
#[must_use]
pub fn outearning_managers(employees: &[Employee]) -> Vec<&str> {
    Query::over(employees)
        .filter(|e| e.manager.is_some())
        .inner_join(
            employees,
            |e| e.manager,
            |m| Some(m.emp_no),
            |e, m| (*e, *m),
        )
        .filter(|(e, m)| e.salary > m.salary)
        .select(|(e, _)| e.name.as_str())
        .into_vec()
}

/// Commission percentages for employees with a positive commission,
/// largest first.
#[must_use]
pub fn commission_percentages(employees: &[Employee]) -> Vec<CommissionShare> {
    Query::over(employees)
        .select_many(|e| {
            let commission = e.commission.filter(|c| c.is_sign_positive() && !c.is_zero())?;
            let share = commission.checked_div(e.salary)?;
            Some(CommissionShare {
                name: e.name.clone(),
                salary: e.salary,
                commission,
                percentage: round_half_away(share * dec!(100), 2),
            })
        })
        .order_by_key(|row| row.percentage, Direction::Descending)
        .into_vec()
}

/// Headcount per salary bracket.
///
/// Brackets are range-joined against employees, so a bracket nobody falls
/// into is absent from the result.
#[must_use]
pub fn salary_brackets(employees: &[Employee], brackets: &[SalaryBracket]) -> Vec<BracketCount> {
    Query::over(brackets)
        .cross_join(employees, |b, e| (*b, *e))
        .filter(|(b, e)| b.contains(e.salary))
        .group_by(|(b, _)| b.name.clone())
        .select(|g| BracketCount {
            count: g.count(),
            bracket: g.key,
        })
        .into_vec()
}

/// Quartile boundaries `[q1, q2, q3]`.
///
/// Boundary `k` is the salary at sorted index `floor(count * k / 4)`; no
/// interpolation. `None` for an empty list.
#[must_use]
pub fn quartile_boundaries(employees: &[Employee]) -> Option<[Decimal; 3]> {
    let sorted = Query::over(employees)
        .select(|e| e.salary)
        .order_by_key(|s| *s, Direction::Ascending)
        .into_vec();
    if sorted.is_empty() {
        return None;
    }

    let count = sorted.len();
    let at = |k: usize| sorted[count * k / 4];
    Some([at(1), at(2), at(3)])
}

/// Every employee labelled with the quartile of their salary.
///
/// Label 1 covers salaries up to and including `q1`, 2 up to `q2`, 3 up
/// to `q3`, and 4 the rest.
#[must_use]
pub fn salary_quartiles(employees: &[Employee]) -> Vec<QuartileRow> {
    let Some([q1, q2, q3]) = quartile_boundaries(employees) else {
        return Vec::new();
    };

    Query::over(employees)
        .select(|e| QuartileRow {
            name: e.name.clone(),
            salary: e.salary,
            quartile: match e.salary {
                s if s <= q1 => 1,
                s if s <= q2 => 2,
                s if s <= q3 => 3,
                _ => 4,
            },
        })
        .into_vec()
}

/// Per-department payroll and the raise budget at `rate`.
///
/// Departments without employees drop out of the join, as do departments
/// whose budget overflows the decimal range.
#[must_use]
pub fn raise_budgets(
    departments: &[Department],
    employees: &[Employee],
    rate: Decimal,
) -> Vec<RaiseBudget> {
    Query::over(departments)
        .inner_join(employees, |d| d.dept_no, |e| e.dept_no, |d, e| (*d, *e))
        .group_by(|(d, _)| (d.dept_no, d.name.clone()))
        .select_many(|g| {
            let total_salary = g.sum_by(|(_, e)| e.salary);
            let increase_budget = total_salary.checked_mul(rate)?;
            let (dept_no, department) = g.key;
            Some(RaiseBudget {
                dept_no,
                department,
                total_salary,
                increase_budget,
            })
        })
        .into_vec()
}

/// Salary spread in departments with at least two employees, widest first.
///
/// Rows are ordered by the exact ratio; only the reported `ratio` is
/// rounded.
#[must_use]
pub fn salary_disparities(employees: &[Employee]) -> Vec<SalaryDisparity> {
    Query::over(employees)
        .group_by(|e| e.dept_no)
        .filter(|g| g.count() >= 2)
        .select_many(|g| {
            let max_salary = g.max_by(|e| e.salary)?;
            let min_salary = g.min_by(|e| e.salary)?;
            let ratio = max_salary.checked_div(min_salary)?;
            let row = SalaryDisparity {
                dept_no: g.key,
                max_salary,
                min_salary,
                ratio: round_half_away(ratio, 2),
            };
            Some((ratio, row))
        })
        .order_by_key(|(ratio, _)| *ratio, Direction::Descending)
        .select(|(_, row)| row)
        .into_vec()
}

/// Per-department cost per head, best rated first.
///
/// The rating is `base / average_salary`, so the department with the
/// lowest mean salary rates highest. Rows are ordered by the exact rating;
/// only the reported `efficiency_rating` is rounded.
#[must_use]
pub fn department_efficiency(
    departments: &[Department],
    employees: &[Employee],
    base: Decimal,
) -> Vec<DepartmentEfficiency> {
    Query::over(departments)
        .inner_join(employees, |d| d.dept_no, |e| e.dept_no, |d, e| (*d, *e))
        .group_by(|(d, _)| (d.dept_no, d.name.clone()))
        .select_many(|g| {
            let employee_count = g.count();
            let total_salary = g.sum_by(|(_, e)| e.salary);
            let average_salary = g.average_by(|(_, e)| e.salary)?;
            let rating = base.checked_div(average_salary)?;
            let (dept_no, department) = g.key;
            let row = DepartmentEfficiency {
                dept_no,
                department,
                employee_count,
                total_salary,
                average_salary,
                efficiency_rating: round_half_away(rating, 2),
            };
            Some((rating, row))
        })
        .order_by_key(|(rating, _)| *rating, Direction::Descending)
        .select(|(_, row)| row)
        .into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmpNo;
    use chrono::NaiveDate;

    fn emp(no: u32, manager: Option<u32>, salary: Decimal, commission: Option<Decimal>) -> Employee {
        Employee {
            emp_no: EmpNo(no),
            name: format!("E{no}"),
            job: "CLERK".to_string(),
            manager: manager.map(EmpNo),
            hire_date: NaiveDate::from_ymd_opt(1981, 1, 1).unwrap(),
            salary,
            commission,
            dept_no: DeptNo(10),
        }
    }

    #[test]
    fn outearning_detects_higher_paid_report() {
        let employees = vec![
            emp(1, None, dec!(1000), None),
            emp(2, Some(1), dec!(1500), None),
            emp(3, Some(1), dec!(900), None),
        ];
        assert_eq!(outearning_managers(&employees), vec!["E2"]);
    }

    #[test]
    fn zero_and_absent_commission_are_skipped() {
        let employees = vec![
            emp(1, None, dec!(1000), Some(dec!(0))),
            emp(2, None, dec!(1000), None),
            emp(3, None, dec!(3000), Some(dec!(1000))),
        ];
        let shares = commission_percentages(&employees);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, dec!(33.33));
    }

    #[test]
    fn zero_salary_does_not_divide() {
        let employees = vec![emp(1, None, dec!(0), Some(dec!(10)))];
        assert!(commission_percentages(&employees).is_empty());
    }

    #[test]
    fn quartiles_of_empty_are_empty() {
        assert_eq!(quartile_boundaries(&[]), None);
        assert!(salary_quartiles(&[]).is_empty());
    }

    #[test]
    fn quartile_boundaries_use_floor_index() {
        let employees: Vec<Employee> = [400, 100, 300, 200, 500]
            .into_iter()
            .enumerate()
            .map(|(i, s)| emp(u32::try_from(i).unwrap(), None, Decimal::from(s), None))
            .collect();
        // count 5: indices 1, 2, 3
        assert_eq!(
            quartile_boundaries(&employees),
            Some([dec!(200), dec!(300), dec!(400)])
        );
    }

    #[test]
    fn disparity_needs_two_employees() {
        let employees = vec![emp(1, None, dec!(1000), None)];
        assert!(salary_disparities(&employees).is_empty());
    }

    fn in_dept(mut employee: Employee, dept: u32) -> Employee {
        employee.dept_no = DeptNo(dept);
        employee
    }

    fn depts(numbers: &[u32]) -> Vec<Department> {
        numbers
            .iter()
            .map(|&no| Department {
                dept_no: DeptNo(no),
                name: format!("D{no}"),
                location: "HERE".to_string(),
            })
            .collect()
    }

    #[test]
    fn disparity_orders_by_exact_ratio() {
        // Both ratios round to 1.00; the wider spread must still lead.
        let employees = vec![
            in_dept(emp(1, None, dec!(1001), None), 1),
            in_dept(emp(2, None, dec!(1000), None), 1),
            in_dept(emp(3, None, dec!(1004), None), 2),
            in_dept(emp(4, None, dec!(1000), None), 2),
        ];
        let rows = salary_disparities(&employees);
        let order: Vec<_> = rows.iter().map(|row| (row.dept_no, row.ratio)).collect();
        assert_eq!(
            order,
            vec![(DeptNo(2), dec!(1.00)), (DeptNo(1), dec!(1.00))]
        );
    }

    #[test]
    fn efficiency_orders_by_exact_rating() {
        // Averages 1427 and 1426 both rate 0.70 after rounding.
        let employees = vec![
            in_dept(emp(1, None, dec!(1427), None), 1),
            in_dept(emp(2, None, dec!(1426), None), 2),
        ];
        let rows = department_efficiency(&depts(&[1, 2]), &employees, dec!(1000));
        let order: Vec<_> = rows
            .iter()
            .map(|row| (row.dept_no, row.efficiency_rating))
            .collect();
        assert_eq!(
            order,
            vec![(DeptNo(2), dec!(0.70)), (DeptNo(1), dec!(0.70))]
        );
    }

    #[test]
    fn overflowing_raise_budget_is_skipped() {
        let employees = vec![in_dept(emp(1, None, dec!(5000), None), 1)];
        let huge = Decimal::from_scientific("1e26").unwrap();
        assert!(raise_budgets(&depts(&[1]), &employees, huge).is_empty());

        let rows = raise_budgets(&depts(&[1]), &employees, dec!(0.05));
        assert_eq!(rows[0].increase_budget, dec!(250));
    }

    #[test]
    fn top_earners_with_zero_is_empty() {
        let employees = vec![emp(1, None, dec!(1000), None)];
        assert!(top_earners(&employees, 0).is_empty());
    }
}
