//! Note model - free-form text captured on the dashboard.

use serde::{Deserialize, Serialize};
use crate::id::NoteId;
use crate::error::ValidationError;
use crate::{optional_text, Time};

/// A note. Notes are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,

    /// Note title
    pub title: String,

    /// Body text
    pub content: String,

    /// Free-text subject
    pub subject: Option<String>,

    /// Creation timestamp
    pub created_at: Time,
}

impl Note {
    /// Build a note from validated input.
    pub fn new(id: NoteId, input: NewNote, created_at: Time) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            content: input.content.trim().to_string(),
            subject: input.subject,
            created_at,
        }
    }
}

/// User input for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    /// Raw title
    pub title: String,
    /// Raw content
    pub content: String,
    /// Subject (blank means none)
    pub subject: Option<String>,
}

impl NewNote {
    /// Start a note draft.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            subject: None,
        }
    }

    /// Set the subject. Blank text clears it.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = optional_text(subject);
        self
    }

    /// Check required fields. Title is checked first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }
}
