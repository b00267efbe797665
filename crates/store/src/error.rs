//! Store error type.

use futureflow_core::ValidationError;

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when creating entities.
///
/// Unknown ids are not errors: toggling or adjusting a missing entity is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The input failed validation; nothing was inserted
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Too many ids requested within one millisecond
    #[error("id space exhausted for the current millisecond")]
    IdExhausted,
}
