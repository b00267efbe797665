//! Plain-text rendering of dashboard state.

use std::fmt::Write;

use futureflow_analytics::{goal_progress_percent, AnalyticsSummary};
use futureflow_core::{Goal, Note, Task};
use futureflow_store::EntityStore;
use futureflow_timer::{format_clock, TimerEvent, TimerSnapshot};

pub const HELP: &str = "\
Commands:
  task add <title...> [--priority low|medium|high] [--due YYYY-MM-DD] [--subject S]
  task toggle <n|id>
  task list [--done|--open] [--priority P] [--subject S] [--sort newest|oldest|priority|due]
  note add <title> <content...> [--subject S]
  note list
  goal add <title...> --target N [--category C]
  goal inc|dec <n|id> [--by N]
  goal list
  timer start|pause|reset|status
  stats [--json]
  quit";

const BAR_WIDTH: usize = 20;

pub fn task_line(position: usize, task: &Task) -> String {
    let mut line = format!(
        "{:>2}. [{}] {} ({})",
        position,
        if task.completed { "x" } else { " " },
        task.title,
        task.priority
    );
    if let Some(subject) = &task.subject {
        let _ = write!(line, " #{}", subject);
    }
    if let Some(due) = task.due_date {
        let _ = write!(line, " due {}", due);
    }
    line
}

/// Each task is paired with its 1-based position in the full task list,
/// which is what `task toggle <n>` resolves against.
pub fn task_list(tasks: &[(usize, &Task)]) -> String {
    if tasks.is_empty() {
        return "No tasks".to_string();
    }
    tasks
        .iter()
        .map(|(position, t)| task_line(*position, t))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes".to_string();
    }
    let mut out = String::new();
    for (i, note) in notes.iter().enumerate() {
        let _ = write!(out, "{:>2}. {}", i + 1, note.title);
        if let Some(subject) = &note.subject {
            let _ = write!(out, " #{}", subject);
        }
        let _ = writeln!(out, " - {}", note.created_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out, "    {}", note.content);
    }
    out.trim_end().to_string()
}

/// Position 0 omits the list number.
pub fn goal_line(position: usize, goal: &Goal) -> String {
    let pct = goal_progress_percent(goal);
    let filled = pct as usize * BAR_WIDTH / 100;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    let prefix = if position > 0 { format!("{:>2}. ", position) } else { String::new() };
    let category = goal
        .category
        .as_deref()
        .map(|c| format!(" #{}", c))
        .unwrap_or_default();
    format!(
        "{}{}{} [{}] {}/{} ({}%)",
        prefix, goal.title, category, bar, goal.current, goal.target, pct
    )
}

pub fn goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals".to_string();
    }
    goals
        .iter()
        .enumerate()
        .map(|(i, g)| goal_line(i + 1, g))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn timer_status(snapshot: &TimerSnapshot) -> String {
    format!(
        "{} {} [{}] - {} focus sessions",
        snapshot.phase().label(),
        format_clock(snapshot.remaining_secs),
        if snapshot.is_running { "running" } else { "paused" },
        snapshot.completed_focus_count
    )
}

pub fn timer_event(event: &TimerEvent, show_ticks: bool) -> Option<String> {
    match event {
        TimerEvent::Tick { phase, remaining } if show_ticks => {
            Some(format!("{} {}", phase.label(), format_clock(*remaining)))
        }
        TimerEvent::PhaseCompleted { finished, next, completed_focus_count } => Some(format!(
            "{} phase finished ({} focus sessions). {} ready - 'timer start' to begin.",
            finished, completed_focus_count, next.label()
        )),
        _ => None,
    }
}

pub fn summary(summary: &AnalyticsSummary, store: &EntityStore) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Task completion: {}% ({}/{} done)",
        summary.completion_rate, summary.completed_tasks, summary.total_tasks
    );
    let _ = writeln!(out, "Focus sessions:  {}", summary.focus_sessions);
    let _ = writeln!(
        out,
        "Active goals:    {} of {}",
        summary.active_goals, summary.total_goals
    );
    let _ = writeln!(out, "Notes:           {}", summary.total_notes);
    let _ = writeln!(out, "Recently completed:");
    if summary.recently_completed.is_empty() {
        let _ = writeln!(out, "  (none yet)");
    }
    for id in &summary.recently_completed {
        if let Some(task) = store.task(*id) {
            let _ = writeln!(out, "  - {}", task.title);
        }
    }
    out.trim_end().to_string()
}
