//! Goal model - a numeric target with clamped progress.

use serde::{Deserialize, Serialize};
use crate::id::GoalId;
use crate::error::ValidationError;
use crate::{optional_text, Time};

/// A goal with a positive integer target.
///
/// `current` stays within `0..=target`; updates clamp instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Target value (always > 0)
    pub target: u64,

    /// Progress so far
    pub current: u64,

    /// Free-text category, e.g. "Fitness"
    pub category: Option<String>,

    /// Creation timestamp
    pub created_at: Time,
}

impl Goal {
    /// Build a goal with zero progress.
    pub fn new(id: GoalId, title: impl Into<String>, target: u64, category: Option<String>, created_at: Time) -> Self {
        Self {
            id,
            title: title.into().trim().to_string(),
            target,
            current: 0,
            category,
            created_at,
        }
    }

    /// Move progress by `delta`, clamped to `[0, target]`. Returns the new value.
    pub fn adjust(&mut self, delta: i64) -> u64 {
        let next = if delta >= 0 {
            self.current.saturating_add(delta.unsigned_abs())
        } else {
            self.current.saturating_sub(delta.unsigned_abs())
        };
        self.current = next.min(self.target);
        self.current
    }

    /// Still has progress to make.
    pub fn is_active(&self) -> bool {
        self.current < self.target
    }

    /// Target reached.
    pub fn is_complete(&self) -> bool {
        !self.is_active()
    }
}

/// User input for creating a goal. The target is kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGoal {
    /// Raw title
    pub title: String,
    /// Raw target text
    pub target: String,
    /// Category (blank means none)
    pub category: Option<String>,
}

impl NewGoal {
    /// Start a goal draft.
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
            category: None,
        }
    }

    /// Set the category. Blank text clears it.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = optional_text(category);
        self
    }

    /// Validate the draft, returning the parsed target.
    pub fn validate(&self) -> Result<u64, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        parse_target(&self.target)
    }
}

/// Parse a goal target: a base-10 integer greater than zero.
pub fn parse_target(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value as u64),
        _ => Err(ValidationError::InvalidTarget(trimmed.to_string())),
    }
}
