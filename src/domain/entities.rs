//! Domain entities: core data structures

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, comparable identity of one personnel record.
pub type EmployeeId = u32;

/// One hierarchy member with at most one manager reference.
///
/// The snapshot the caller supplies is a flat sequence of these; the
/// manager relation is expressed solely through `manager_id`, which must
/// reference another employee's id in the same snapshot (or be `None`
/// for root employees).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Manager's id, None for root employees
    pub manager_id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Employee {
    /// Minimal record with empty display attributes.
    pub fn new(
        id: EmployeeId,
        manager_id: Option<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            manager_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            job_title: None,
            department: String::new(),
            email: String::new(),
            phone: None,
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
