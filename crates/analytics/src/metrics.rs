//! Pure metric functions.

use futureflow_core::{Goal, Task};

/// How many completed tasks the analytics view lists.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Rounded ratio as a whole percentage in `[0, 100]`.
fn percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = (part as f64 / whole as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Number of completed tasks.
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}

/// Share of completed tasks, 0 for an empty list.
pub fn completion_rate(tasks: &[Task]) -> u8 {
    percent(completed_count(tasks) as u64, tasks.len() as u64)
}

/// Progress toward a goal's target, capped at 100.
pub fn goal_progress_percent(goal: &Goal) -> u8 {
    percent(goal.current, goal.target)
}

/// Goals that have not reached their target.
pub fn active_goals(goals: &[Goal]) -> Vec<&Goal> {
    goals.iter().filter(|g| g.is_active()).collect()
}

/// The `limit` most recently created completed tasks, newest first.
///
/// Ordered by creation time, not by list position; equal timestamps fall
/// back to id order.
pub fn recently_completed_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut done: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
    done.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
    done.truncate(limit);
    done
}
