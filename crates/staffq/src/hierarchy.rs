//! Reporting-line graph using petgraph.
//!
//! Edges point from manager to direct report. Nodes are added in input
//! order, so sorting neighbours by node index recovers input order (petgraph
//! itself yields the most recently added edge first).

use crate::domain::{EmpNo, Employee};
use crate::error::IntegrityViolation;
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

/// One root of the organization chart with two levels below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgChart {
    /// Name of the root employee
    pub manager: String,

    /// The root's direct reports
    pub direct_reports: Vec<DirectReport>,
}

/// A direct report and the people reporting to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectReport {
    /// Name of the direct report
    pub employee: String,

    /// Names of their own direct reports
    pub second_level: Vec<String>,
}

/// Manager → report graph over a borrowed employee list.
pub struct OrgGraph<'a> {
    graph: DiGraph<&'a Employee, ()>,
    node_map: HashMap<EmpNo, NodeIndex>,
}

impl<'a> OrgGraph<'a> {
    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityViolation::UnknownManager`] for a manager
    /// reference that names no employee in `employees`.
    pub fn build(employees: &'a [Employee]) -> Result<Self, IntegrityViolation> {
        let mut graph = DiGraph::with_capacity(employees.len(), employees.len());
        let node_map: HashMap<EmpNo, NodeIndex> = employees
            .iter()
            .map(|e| (e.emp_no, graph.add_node(e)))
            .collect();

        for employee in employees {
            let Some(manager) = employee.manager else {
                continue;
            };
            let from = node_map
                .get(&manager)
                .ok_or(IntegrityViolation::UnknownManager {
                    employee: employee.emp_no,
                    manager,
                })?;
            graph.add_edge(*from, node_map[&employee.emp_no], ());
        }

        Ok(Self { graph, node_map })
    }

    /// An employee on a management cycle, if the relation has one.
    #[must_use]
    pub fn find_cycle(&self) -> Option<EmpNo> {
        algo::toposort(&self.graph, None)
            .err()
            .map(|cycle| self.graph[cycle.node_id()].emp_no)
    }

    /// Employees without a manager, in input order.
    #[must_use]
    pub fn roots(&self) -> Vec<&'a Employee> {
        self.graph
            .node_indices()
            .filter(|&ix| {
                self.graph
                    .neighbors_directed(ix, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|ix| self.graph[ix])
            .collect()
    }

    /// Employees reporting directly to `manager`, in input order.
    ///
    /// Unknown managers have no reports.
    #[must_use]
    pub fn direct_reports(&self, manager: EmpNo) -> Vec<&'a Employee> {
        let Some(&node) = self.node_map.get(&manager) else {
            return Vec::new();
        };

        let mut reports: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        reports.sort_unstable();
        reports.into_iter().map(|ix| self.graph[ix]).collect()
    }

    /// Two-level chart under every root.
    #[must_use]
    pub fn chart(&self) -> Vec<OrgChart> {
        self.roots()
            .into_iter()
            .map(|root| OrgChart {
                manager: root.name.clone(),
                direct_reports: self
                    .direct_reports(root.emp_no)
                    .into_iter()
                    .map(|report| DirectReport {
                        employee: report.name.clone(),
                        second_level: self
                            .direct_reports(report.emp_no)
                            .into_iter()
                            .map(|e| e.name.clone())
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeptNo;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn emp(no: u32, name: &str, manager: Option<u32>) -> Employee {
        Employee {
            emp_no: EmpNo(no),
            name: name.to_string(),
            job: "CLERK".to_string(),
            manager: manager.map(EmpNo),
            hire_date: NaiveDate::from_ymd_opt(1981, 1, 1).unwrap(),
            salary: dec!(1000),
            commission: None,
            dept_no: DeptNo(10),
        }
    }

    #[test]
    fn chart_has_two_levels_in_input_order() {
        let employees = vec![
            emp(1, "BOSS", None),
            emp(2, "LEFT", Some(1)),
            emp(3, "RIGHT", Some(1)),
            emp(4, "LEAF", Some(2)),
        ];
        let graph = OrgGraph::build(&employees).unwrap();

        let chart = graph.chart();
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].manager, "BOSS");
        let names: Vec<&str> = chart[0]
            .direct_reports
            .iter()
            .map(|r| r.employee.as_str())
            .collect();
        assert_eq!(names, vec!["LEFT", "RIGHT"]);
        assert_eq!(chart[0].direct_reports[0].second_level, vec!["LEAF"]);
        assert!(chart[0].direct_reports[1].second_level.is_empty());
    }

    #[test]
    fn unknown_manager_is_rejected() {
        let employees = vec![emp(1, "ORPHAN", Some(99))];
        let err = OrgGraph::build(&employees).err().unwrap();
        assert_eq!(
            err,
            IntegrityViolation::UnknownManager {
                employee: EmpNo(1),
                manager: EmpNo(99)
            }
        );
    }

    #[test]
    fn cycle_is_detected() {
        let employees = vec![
            emp(1, "ROOT", None),
            emp(2, "A", Some(3)),
            emp(3, "B", Some(2)),
        ];
        let graph = OrgGraph::build(&employees).unwrap();
        let on_cycle = graph.find_cycle().unwrap();
        assert!(on_cycle == EmpNo(2) || on_cycle == EmpNo(3));
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let employees = vec![emp(1, "ROOT", None), emp(2, "A", Some(1))];
        assert_eq!(OrgGraph::build(&employees).unwrap().find_cycle(), None);
    }

    #[test]
    fn unknown_manager_has_no_reports() {
        let employees = vec![emp(1, "ROOT", None)];
        let graph = OrgGraph::build(&employees).unwrap();
        assert!(graph.direct_reports(EmpNo(42)).is_empty());
    }
}
