//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::EmployeeId;

/// Errors raised while building hierarchy views.
///
/// These represent business rule violations in the caller-supplied
/// snapshot; the builder performs no I/O, so nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("cycle detected in manager relation at employee: {0}")]
    CycleDetected(EmployeeId),

    #[error("employee {employee} references missing manager: {manager}")]
    DanglingManager {
        employee: EmployeeId,
        manager: EmployeeId,
    },
}

/// Result type for hierarchy operations.
pub type HierarchyResult<T> = Result<T, HierarchyError>;
