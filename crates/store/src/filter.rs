//! Task list views.

use futureflow_core::{Priority, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filter for listing tasks. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Only done (`Some(true)`) or open (`Some(false)`) tasks
    pub completed: Option<bool>,
    /// Only this priority
    pub priority: Option<Priority>,
    /// Only this subject (case-insensitive)
    pub subject: Option<String>,
    /// Result order
    pub sort: TaskSort,
}

impl TaskFilter {
    /// Check whether a task passes the filter.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(completed) = self.completed {
            if task.completed != completed {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            match &task.subject {
                Some(s) if s.eq_ignore_ascii_case(subject.trim()) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Sort order for task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSort {
    /// Newest first (store order)
    #[default]
    Newest,
    /// Oldest first
    Oldest,
    /// High priority first, then newest
    Priority,
    /// Earliest due date first, undated last
    DueDate,
}

impl TaskSort {
    /// Sort a newest-first slice of task references in place.
    pub(crate) fn apply(&self, tasks: &mut [&Task]) {
        match self {
            TaskSort::Newest => {}
            TaskSort::Oldest => tasks.reverse(),
            // stable sort keeps newest-first within a priority
            TaskSort::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
            TaskSort::DueDate => tasks.sort_by(|a, b| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
        }
    }
}

impl std::str::FromStr for TaskSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(TaskSort::Newest),
            "oldest" => Ok(TaskSort::Oldest),
            "priority" => Ok(TaskSort::Priority),
            "due" | "due_date" | "due-date" => Ok(TaskSort::DueDate),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}
