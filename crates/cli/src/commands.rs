//! Interactive command grammar.

use clap::{Args, Parser, Subcommand};
use futureflow_core::Priority;
use futureflow_store::TaskSort;

/// One line typed at the prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "futureflow", disable_help_subcommand = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommand),
    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),
    /// Manage goals
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Control the focus timer
    #[command(subcommand)]
    Timer(TimerCommand),
    /// Show analytics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List commands
    Help,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Add a task
    Add {
        /// Title words
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// low, medium or high
        #[arg(long, short, default_value = "medium")]
        priority: Priority,
        /// Due date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
        /// Subject
        #[arg(long, short, default_value = "")]
        subject: String,
    },
    /// Mark a task done or not done
    Toggle {
        /// Task id or list position
        id: String,
    },
    /// List tasks
    List(TaskListArgs),
}

#[derive(Args, Debug)]
pub struct TaskListArgs {
    /// Only completed tasks
    #[arg(long, conflicts_with = "open")]
    pub done: bool,
    /// Only open tasks
    #[arg(long)]
    pub open: bool,
    /// Only this priority
    #[arg(long, short)]
    pub priority: Option<Priority>,
    /// Only this subject
    #[arg(long, short)]
    pub subject: Option<String>,
    /// newest, oldest, priority or due
    #[arg(long, default_value = "newest")]
    pub sort: TaskSort,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Add a note
    Add {
        /// Title (quote it if it has spaces)
        title: String,
        /// Content words
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
        /// Subject
        #[arg(long, short, default_value = "")]
        subject: String,
    },
    /// List notes
    List,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    /// Add a goal
    Add {
        /// Title words
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        /// Positive whole number to reach
        #[arg(long, short, allow_hyphen_values = true)]
        target: String,
        /// Category
        #[arg(long, short, default_value = "")]
        category: String,
    },
    /// Increase progress
    Inc {
        /// Goal id or list position
        id: String,
        /// Step size
        #[arg(long, default_value_t = 1)]
        by: u32,
    },
    /// Decrease progress
    Dec {
        /// Goal id or list position
        id: String,
        /// Step size
        #[arg(long, default_value_t = 1)]
        by: u32,
    },
    /// List goals
    List,
}

#[derive(Subcommand, Debug)]
pub enum TimerCommand {
    /// Start or resume
    Start,
    /// Pause
    Pause,
    /// Back to a full focus phase
    Reset,
    /// Show the clock
    Status,
}

/// Split a line into words, keeping double-quoted text together.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if has_word {
        words.push(current);
    }
    words
}
