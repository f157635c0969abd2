//! Output display nodes for hierarchy views.

use std::fmt;

use serde::Serialize;
use termtree::Tree;

use crate::domain::entities::{Employee, EmployeeId};

/// One node of a constructed hierarchy view.
///
/// A pure down-tree value: attributes copied from the source employee
/// plus an ordered list of reports. Nodes never refer back to their
/// parent and are never mutated after their builder returns them, so a
/// view is safe to discard or serialize immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgNode {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
    pub reports: Vec<OrgNode>,
}

impl OrgNode {
    /// Node with attributes copied from `employee` and the given reports.
    pub(crate) fn from_employee(employee: &Employee, reports: Vec<OrgNode>) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            job_title: employee.job_title.clone(),
            department: employee.department.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            reports,
        }
    }

    /// Shallow node: attributes only, reports deliberately empty.
    pub(crate) fn shallow(employee: &Employee) -> Self {
        Self::from_employee(employee, Vec::new())
    }

    /// Number of nodes in this tree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.reports.iter().map(OrgNode::node_count).sum::<usize>()
    }

    /// Depth of this tree; a node with no reports has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .reports
            .iter()
            .map(OrgNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for OrgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.job_title {
            Some(title) => write!(f, "{} {} ({})", self.first_name, self.last_name, title),
            None => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

pub trait OrgNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl OrgNodeConvert for OrgNode {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.to_string();

        // Recursively construct the children
        let leaves: Vec<_> = self.reports.iter().map(|r| r.to_tree_string()).collect();

        Tree::new(root).with_leaves(leaves)
    }
}
