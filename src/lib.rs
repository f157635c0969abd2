//! Organizational hierarchy views from flat manager-pointer records.
//!
//! The caller supplies a snapshot of [`Employee`] records, each
//! optionally naming its manager by id. A [`HierarchyIndex`] built over
//! that snapshot answers three questions:
//!
//! * [`HierarchyIndex::build_forest`] - the complete multi-root forest,
//! * [`HierarchyIndex::build_subtree`] - one employee with every
//!   transitive report expanded,
//! * [`HierarchyIndex::build_contextual_view`] - where one employee sits:
//!   ancestor chain, level peers, own subtree expanded, everything else
//!   collapsed to shallow nodes.
//!
//! The builder never mutates the snapshot and keeps no state between
//! calls; each returned [`OrgNode`] tree is an independent value.
//!
//! ```
//! use orgtree::{Employee, HierarchyIndex};
//!
//! let snapshot = vec![
//!     Employee::new(1, None, "Grace", "Hopper"),
//!     Employee::new(2, Some(1), "Ada", "Lovelace"),
//! ];
//!
//! let index = HierarchyIndex::new(&snapshot);
//! let forest = index.build_forest().unwrap();
//! assert_eq!(forest.len(), 1);
//! assert_eq!(forest[0].reports[0].id, 2);
//! ```

pub mod domain;
pub mod util;

pub use domain::{
    Employee, EmployeeId, HierarchyError, HierarchyIndex, HierarchyResult, OrgNode, OrgNodeConvert,
};
