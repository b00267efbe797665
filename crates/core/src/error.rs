//! Validation errors for user-supplied entity fields.

/// A create operation was rejected because of its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title trims to empty
    #[error("title must not be empty")]
    EmptyTitle,

    /// Note content trims to empty
    #[error("content must not be empty")]
    EmptyContent,

    /// Goal target is not a positive integer
    #[error("target must be a positive integer (got '{0}')")]
    InvalidTarget(String),

    /// Due date is not a calendar date
    #[error("due date must look like YYYY-MM-DD (got '{0}')")]
    InvalidDueDate(String),
}
