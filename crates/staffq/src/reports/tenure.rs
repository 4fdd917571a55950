//! Hire-date reports.

use crate::domain::Employee;
use chrono::NaiveDate;
use serde::Serialize;
use staffq_ops::{Direction, Query};

/// Mean days per year used for tenure in years.
const DAYS_PER_YEAR: f64 = 365.25;

/// Two employees hired one after the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HirePair {
    /// The earlier hire
    pub first: String,
    /// The next hire after `first`
    pub second: String,
    /// Days between the two hire dates
    pub days_apart: i64,
}

/// Mean years of service as of `reference`.
///
/// Years are days divided by 365.25. `None` for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_tenure_years(employees: &[Employee], reference: NaiveDate) -> Option<f64> {
    Query::over(employees)
        .average_by(|e| (reference - e.hire_date).num_days() as f64 / DAYS_PER_YEAR)
}

/// Consecutive hires, in hire-date order, at most `window_days` apart.
///
/// Employees hired on the same day keep their fixture order.
#[must_use]
pub fn close_hires(employees: &[Employee], window_days: i64) -> Vec<HirePair> {
    Query::over(employees)
        .order_by_key(|e| e.hire_date, Direction::Ascending)
        .pairwise(|first, second| HirePair {
            first: first.name.clone(),
            second: second.name.clone(),
            days_apart: (second.hire_date - first.hire_date).num_days(),
        })
        .filter(|pair| pair.days_apart <= window_days)
        .into_vec()
}
