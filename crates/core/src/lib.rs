//! FutureFlow core data models.
//!
//! This crate defines the entities behind the productivity dashboard:
//! tasks, notes and goals, plus the typed identifiers and validation
//! errors shared by the store and the presentation layer.

#![warn(missing_docs)]

// Core identities
mod id;

// Entities
mod task;
mod note;
mod goal;

// Validation
mod error;

// Re-exports
pub use id::*;

pub use task::{Task, NewTask, Priority, parse_due_date};
pub use note::{Note, NewNote};
pub use goal::{Goal, NewGoal, parse_target};
pub use error::ValidationError;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Normalize an optional free-text field: blank input means "not set".
pub fn optional_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" Math "), Some("Math".to_string()));
    }
}
