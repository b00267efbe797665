//! Focus/break session timer.
//!
//! [`SessionTimer`] is the synchronous state machine. [`FocusTimer`] drives it
//! once per second on a cancelable [`RepeatingTask`] and broadcasts
//! [`TimerEvent`]s to whoever renders it.

#![warn(missing_docs)]

pub mod config;
pub mod scheduler;
pub mod service;
pub mod session;

pub use config::TimerConfig;
pub use scheduler::RepeatingTask;
pub use service::{FocusTimer, TimerEvent};
pub use session::{format_clock, Phase, SessionTimer, TickOutcome, TimerSnapshot};
