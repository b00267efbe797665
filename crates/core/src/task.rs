//! Task model - a to-do item on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::id::TaskId;
use crate::error::ValidationError;
use crate::{optional_text, Time};

/// A task the user wants to get done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task title (never blank)
    pub title: String,

    /// Priority
    pub priority: Priority,

    /// Optional due date
    pub due_date: Option<NaiveDate>,

    /// Free-text subject, e.g. "Math"
    pub subject: Option<String>,

    /// Whether the task is done
    pub completed: bool,

    /// Creation timestamp
    pub created_at: Time,
}

impl Task {
    /// Build a task from validated input. New tasks always start open.
    pub fn new(id: TaskId, input: NewTask, created_at: Time) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            priority: input.priority,
            due_date: input.due_date,
            subject: input.subject,
            completed: false,
            created_at,
        }
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal
    #[default]
    Medium,
    /// Do first
    High,
}

impl Priority {
    /// Capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// User input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    /// Raw title as typed
    pub title: String,
    /// Priority
    pub priority: Priority,
    /// Due date
    pub due_date: Option<NaiveDate>,
    /// Subject (blank means none)
    pub subject: Option<String>,
}

impl NewTask {
    /// Start a task draft with the default priority.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Set the subject. Blank text clears it.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = optional_text(subject);
        self
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Parse a due date as entered in a form. Blank input means no due date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDueDate(input.to_string()))
}
