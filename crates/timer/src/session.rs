//! Session timer state machine.
//!
//! Two flags (`is_running`, `is_break`) plus the remaining seconds describe
//! the four states Focus-paused, Focus-running, Break-paused and
//! Break-running. The countdown always stops when a phase ends; the user has
//! to start the next phase explicitly.

use serde::{Deserialize, Serialize};

use crate::TimerConfig;

/// One half of the focus/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Working
    Focus,
    /// Resting
    Break,
}

impl Phase {
    /// Heading shown for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus Session",
            Phase::Break => "Break Time!",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Focus => write!(f, "focus"),
            Phase::Break => write!(f, "break"),
        }
    }
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed
    Ticked {
        /// Seconds left in the phase
        remaining: u32,
    },
    /// The phase reached zero; the timer is now stopped on the next phase
    PhaseCompleted {
        /// Phase that just ended
        finished: Phase,
        /// Phase now loaded
        next: Phase,
    },
    /// Timer is not running; nothing changed
    Idle,
    /// Tick was scheduled before a later start/pause/reset; nothing changed
    Stale,
}

/// Serializable view of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Seconds left in the current phase
    pub remaining_secs: u32,
    /// Countdown active
    pub is_running: bool,
    /// In the break phase
    pub is_break: bool,
    /// Focus phases finished this session
    pub completed_focus_count: u32,
}

impl TimerSnapshot {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_break {
            Phase::Break
        } else {
            Phase::Focus
        }
    }
}

/// The focus/break countdown.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    remaining_secs: u32,
    is_running: bool,
    is_break: bool,
    completed_focus_count: u32,
    focus_secs: u32,
    break_secs: u32,
    // bumped on every start/pause/reset/phase change
    generation: u64,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(&TimerConfig::default())
    }
}

impl SessionTimer {
    /// Create a stopped timer at the start of a focus phase.
    pub fn new(config: &TimerConfig) -> Self {
        let focus_secs = config.focus_secs.max(1);
        Self {
            remaining_secs: focus_secs,
            is_running: false,
            is_break: false,
            completed_focus_count: 0,
            focus_secs,
            break_secs: config.break_secs.max(1),
            generation: 0,
        }
    }

    /// Start counting down. Returns `false` if already running.
    ///
    /// The remaining time is kept, so this also resumes after a pause.
    pub fn start(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.is_running = true;
        self.generation += 1;
        true
    }

    /// Stop counting down. Returns `false` if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.is_running = false;
        self.generation += 1;
        true
    }

    /// Stop and go back to a full focus phase. The focus count is kept.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.is_break = false;
        self.remaining_secs = self.focus_secs;
        self.generation += 1;
    }

    /// Deliver a tick for the current generation.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_for(self.generation)
    }

    /// Deliver a tick that was scheduled at `generation`.
    ///
    /// A tick from an earlier generation raced with a start/pause/reset and
    /// is discarded.
    pub fn tick_for(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation {
            return TickOutcome::Stale;
        }
        if !self.is_running {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Ticked { remaining: self.remaining_secs };
        }
        self.complete_phase()
    }

    fn complete_phase(&mut self) -> TickOutcome {
        let finished = self.phase();
        match finished {
            Phase::Focus => {
                self.completed_focus_count += 1;
                self.remaining_secs = self.break_secs;
                self.is_break = true;
            }
            Phase::Break => {
                self.remaining_secs = self.focus_secs;
                self.is_break = false;
            }
        }
        self.is_running = false;
        self.generation += 1;
        TickOutcome::PhaseCompleted { finished, next: self.phase() }
    }

    /// Seconds left in the current phase.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Countdown active.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// In the break phase.
    pub fn is_break(&self) -> bool {
        self.is_break
    }

    /// Focus phases finished so far.
    pub fn completed_focus_count(&self) -> u32 {
        self.completed_focus_count
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_break {
            Phase::Break
        } else {
            Phase::Focus
        }
    }

    /// Generation that a tick scheduled now must carry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Copy of the observable state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_secs: self.remaining_secs,
            is_running: self.is_running,
            is_break: self.is_break,
            completed_focus_count: self.completed_focus_count,
        }
    }
}

/// Format seconds as `MM:SS`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut SessionTimer, n: u32) -> Option<TickOutcome> {
        let mut last = None;
        for _ in 0..n {
            last = Some(timer.tick());
        }
        last
    }

    #[test]
    fn test_initial_state() {
        let timer = SessionTimer::default();
        assert_eq!(
            timer.snapshot(),
            TimerSnapshot {
                remaining_secs: 1500,
                is_running: false,
                is_break: false,
                completed_focus_count: 0,
            }
        );
        assert_eq!(timer.phase(), Phase::Focus);
    }

    #[test]
    fn test_full_cycle() {
        let mut timer = SessionTimer::default();
        timer.start();

        let last = run_ticks(&mut timer, 1500);
        assert_eq!(
            last,
            Some(TickOutcome::PhaseCompleted { finished: Phase::Focus, next: Phase::Break })
        );
        assert_eq!(timer.remaining_secs(), 300);
        assert!(timer.is_break());
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_count(), 1);

        assert!(timer.start());
        let last = run_ticks(&mut timer, 300);
        assert_eq!(
            last,
            Some(TickOutcome::PhaseCompleted { finished: Phase::Break, next: Phase::Focus })
        );
        assert_eq!(timer.remaining_secs(), 1500);
        assert!(!timer.is_break());
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_count(), 1);
    }

    #[test]
    fn test_stops_at_phase_boundary() {
        let mut timer = SessionTimer::default();
        timer.start();
        run_ticks(&mut timer, 1500);
        // further ticks without an explicit start do nothing
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_secs(), 300);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut timer = SessionTimer::default();
        assert!(!timer.pause());
        assert!(timer.start());
        assert!(!timer.start());
        timer.tick();
        assert!(timer.pause());
        assert!(!timer.pause());
        // resuming keeps the remaining time
        timer.start();
        assert_eq!(timer.remaining_secs(), 1499);
    }

    #[test]
    fn test_tick_while_paused_is_ignored() {
        let mut timer = SessionTimer::default();
        timer.start();
        timer.tick();
        timer.pause();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_secs(), 1499);
    }

    #[test]
    fn test_late_tick_after_pause_is_stale() {
        let mut timer = SessionTimer::default();
        timer.start();
        let scheduled = timer.generation();
        timer.pause();
        assert_eq!(timer.tick_for(scheduled), TickOutcome::Stale);

        // a restart must not revive the old tick either
        timer.start();
        assert_eq!(timer.tick_for(scheduled), TickOutcome::Stale);
        assert_eq!(timer.remaining_secs(), 1500);
        assert_eq!(timer.tick_for(timer.generation()), TickOutcome::Ticked { remaining: 1499 });
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut timer = SessionTimer::default();
        timer.start();
        run_ticks(&mut timer, 1500);
        timer.start();
        run_ticks(&mut timer, 10);

        let scheduled = timer.generation();
        timer.reset();
        let snap = timer.snapshot();
        assert_eq!(snap.remaining_secs, 1500);
        assert!(!snap.is_running);
        assert!(!snap.is_break);
        assert_eq!(snap.completed_focus_count, 1);
        assert_eq!(timer.tick_for(scheduled), TickOutcome::Stale);
    }

    #[test]
    fn test_custom_lengths() {
        let config = TimerConfig::new().with_focus_secs(2).with_break_secs(1);
        let mut timer = SessionTimer::new(&config);
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked { remaining: 1 });
        assert!(matches!(timer.tick(), TickOutcome::PhaseCompleted { .. }));
        assert_eq!(timer.remaining_secs(), 1);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(299), "04:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(6000), "100:00");
    }
}
