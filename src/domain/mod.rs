//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no
//! persistence, no transport).

pub mod builder;
pub mod entities;
pub mod error;
pub mod node;

pub use builder::HierarchyIndex;
pub use entities::{Employee, EmployeeId};
pub use error::{HierarchyError, HierarchyResult};
pub use node::{OrgNode, OrgNodeConvert};
