//! One interactive session: the store, the timer and the command dispatcher.

use clap::Parser;
use futureflow_analytics::AnalyticsSummary;
use futureflow_core::{parse_due_date, GoalId, NewGoal, NewNote, NewTask, Task, TaskId};
use futureflow_store::{EntityStore, StoreError, TaskFilter};
use futureflow_timer::{FocusTimer, TimerConfig, TimerEvent};
use tokio::sync::broadcast;
use tracing::debug;

use crate::commands::{split_words, Command, GoalCommand, Line, NoteCommand, TaskCommand, TimerCommand};
use crate::render;

/// What the prompt loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineResult {
    /// Print this and keep going
    Output(String),
    /// Leave
    Quit,
}

/// Volatile dashboard state for one run of the program.
pub struct Session {
    store: EntityStore,
    timer: FocusTimer,
}

impl Session {
    /// Start with empty collections and a stopped timer.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            store: EntityStore::new(),
            timer: FocusTimer::new(config),
        }
    }

    /// Timer notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<TimerEvent> {
        self.timer.subscribe()
    }

    /// Release the timer.
    pub async fn shutdown(&mut self) {
        self.timer.shutdown().await;
    }

    /// Parse and run one line.
    pub async fn handle_line(&mut self, line: &str) -> LineResult {
        let words = split_words(line);
        if words.is_empty() {
            return LineResult::Output(String::new());
        }
        let command = match Line::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => return LineResult::Output(e.render().to_string().trim_end().to_string()),
        };
        debug!("Command: {:?}", command);

        let text = match command {
            Command::Task(cmd) => self.task(cmd),
            Command::Note(cmd) => self.note(cmd),
            Command::Goal(cmd) => self.goal(cmd),
            Command::Timer(cmd) => self.timer(cmd).await,
            Command::Stats { json } => self.stats(json).await,
            Command::Help => render::HELP.to_string(),
            Command::Quit => return LineResult::Quit,
        };
        LineResult::Output(text)
    }

    fn task(&mut self, cmd: TaskCommand) -> String {
        match cmd {
            TaskCommand::Add { title, priority, due, subject } => {
                let due_date = match parse_due_date(&due) {
                    Ok(date) => date,
                    Err(e) => return format!("Not added: {}", e),
                };
                let input = NewTask::new(title.join(" "))
                    .with_priority(priority)
                    .with_due_date(due_date)
                    .with_subject(subject);
                match self.store.add_task(input) {
                    Ok(task) => format!("Added task {}", render::task_line(1, &task)),
                    Err(e) => rejected(e),
                }
            }
            TaskCommand::Toggle { id } => {
                let Some(id) = self.resolve_task(&id) else {
                    return format!("No task '{}'", id);
                };
                match self.store.toggle_task(id) {
                    Some(task) if task.completed => format!("Done: {}", task.title),
                    Some(task) => format!("Reopened: {}", task.title),
                    None => format!("No task '{}'", id),
                }
            }
            TaskCommand::List(args) => {
                let filter = TaskFilter {
                    completed: if args.done {
                        Some(true)
                    } else if args.open {
                        Some(false)
                    } else {
                        None
                    },
                    priority: args.priority,
                    subject: args.subject,
                    sort: args.sort,
                };
                let listed: Vec<(usize, &Task)> = self
                    .store
                    .list_tasks(&filter)
                    .into_iter()
                    .filter_map(|task| self.task_position(task.id).map(|n| (n, task)))
                    .collect();
                render::task_list(&listed)
            }
        }
    }

    fn note(&mut self, cmd: NoteCommand) -> String {
        match cmd {
            NoteCommand::Add { title, content, subject } => {
                let input = NewNote::new(title, content.join(" ")).with_subject(subject);
                match self.store.add_note(input) {
                    Ok(note) => format!("Added note '{}'", note.title),
                    Err(e) => rejected(e),
                }
            }
            NoteCommand::List => render::note_list(self.store.notes()),
        }
    }

    fn goal(&mut self, cmd: GoalCommand) -> String {
        let (id, delta) = match cmd {
            GoalCommand::Add { title, target, category } => {
                let input = NewGoal::new(title.join(" "), target).with_category(category);
                return match self.store.add_goal(input) {
                    Ok(goal) => format!("Added goal {}", render::goal_line(1, &goal)),
                    Err(e) => rejected(e),
                };
            }
            GoalCommand::List => return render::goal_list(self.store.goals()),
            GoalCommand::Inc { id, by } => (id, i64::from(by)),
            GoalCommand::Dec { id, by } => (id, -i64::from(by)),
        };
        let Some(goal_id) = self.resolve_goal(&id) else {
            return format!("No goal '{}'", id);
        };
        match self.store.adjust_goal_progress(goal_id, delta) {
            Some(goal) => render::goal_line(0, goal),
            None => format!("No goal '{}'", id),
        }
    }

    async fn timer(&mut self, cmd: TimerCommand) -> String {
        match cmd {
            TimerCommand::Start => {
                if !self.timer.start().await {
                    return "Timer is already running".to_string();
                }
            }
            TimerCommand::Pause => {
                if !self.timer.pause().await {
                    return "Timer is not running".to_string();
                }
            }
            TimerCommand::Reset => self.timer.reset().await,
            TimerCommand::Status => {}
        }
        render::timer_status(&self.timer.snapshot().await)
    }

    async fn stats(&self, json: bool) -> String {
        let focus = self.timer.snapshot().await.completed_focus_count;
        let summary = AnalyticsSummary::compute(&self.store, focus);
        if json {
            return serde_json::to_string_pretty(&summary)
                .unwrap_or_else(|e| format!("Could not encode stats: {}", e));
        }
        render::summary(&summary, &self.store)
    }

    /// 1-based position of a task in the newest-first list.
    fn task_position(&self, id: TaskId) -> Option<usize> {
        self.store.tasks().iter().position(|t| t.id == id).map(|i| i + 1)
    }

    /// Accept a full id or a 1-based position in the newest-first list.
    fn resolve_task(&self, reference: &str) -> Option<TaskId> {
        match reference.parse::<usize>() {
            Ok(n) if n > 0 => self.store.tasks().get(n - 1).map(|t| t.id),
            _ => reference.parse().ok(),
        }
    }

    fn resolve_goal(&self, reference: &str) -> Option<GoalId> {
        match reference.parse::<usize>() {
            Ok(n) if n > 0 => self.store.goals().get(n - 1).map(|g| g.id),
            _ => reference.parse().ok(),
        }
    }
}

fn rejected(err: StoreError) -> String {
    match err {
        StoreError::Validation(e) => format!("Not added: {}", e),
        other => format!("Error: {}", other),
    }
}
