//! Derived metrics (analytics tab).
//!
//! Everything here is recomputed from the current store contents; nothing
//! is cached.

#![warn(missing_docs)]

pub mod metrics;
pub mod summary;

pub use metrics::{
    active_goals, completed_count, completion_rate, goal_progress_percent,
    recently_completed_tasks, DEFAULT_RECENT_LIMIT,
};
pub use summary::AnalyticsSummary;
