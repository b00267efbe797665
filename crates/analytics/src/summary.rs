//! Analytics summary shown on the dashboard.

use chrono::{DateTime, Utc};
use futureflow_core::TaskId;
use futureflow_store::EntityStore;
use serde::Serialize;
use tracing::trace;

use crate::metrics::{
    active_goals, completed_count, completion_rate, recently_completed_tasks, DEFAULT_RECENT_LIMIT,
};

/// A snapshot of the derived numbers at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    /// When the summary was computed
    pub timestamp: DateTime<Utc>,
    /// All tasks
    pub total_tasks: usize,
    /// Completed tasks
    pub completed_tasks: usize,
    /// Completion rate, 0-100
    pub completion_rate: u8,
    /// Finished focus phases
    pub focus_sessions: u32,
    /// All goals
    pub total_goals: usize,
    /// Goals below target
    pub active_goals: usize,
    /// All notes
    pub total_notes: usize,
    /// Most recently created completed tasks, newest first
    pub recently_completed: Vec<TaskId>,
}

impl AnalyticsSummary {
    /// Compute from the store and the timer's focus counter.
    pub fn compute(store: &EntityStore, focus_sessions: u32) -> Self {
        let tasks = store.tasks();
        let goals = store.goals();
        let summary = Self {
            timestamp: Utc::now(),
            total_tasks: tasks.len(),
            completed_tasks: completed_count(tasks),
            completion_rate: completion_rate(tasks),
            focus_sessions,
            total_goals: goals.len(),
            active_goals: active_goals(goals).len(),
            total_notes: store.notes().len(),
            recently_completed: recently_completed_tasks(tasks, DEFAULT_RECENT_LIMIT)
                .into_iter()
                .map(|t| t.id)
                .collect(),
        };
        trace!(?summary, "Computed analytics summary");
        summary
    }
}
