//! Async focus timer service.

use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, trace};

use crate::{Phase, RepeatingTask, SessionTimer, TickOutcome, TimerConfig, TimerSnapshot};

const EVENT_CAPACITY: usize = 64;

/// Notification sent to timer subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// Countdown started or resumed
    Started {
        /// Running phase
        phase: Phase,
        /// Seconds left
        remaining: u32,
    },
    /// Countdown paused
    Paused {
        /// Seconds left
        remaining: u32,
    },
    /// Back to a full focus phase
    Reset,
    /// One second elapsed
    Tick {
        /// Running phase
        phase: Phase,
        /// Seconds left
        remaining: u32,
    },
    /// A phase ended and the timer stopped
    PhaseCompleted {
        /// Phase that ended
        finished: Phase,
        /// Phase now loaded
        next: Phase,
        /// Focus phases finished so far
        completed_focus_count: u32,
    },
}

/// Drives a [`SessionTimer`] in real time.
///
/// At most one ticker is alive at a time. It is cancelled on pause, reset,
/// shutdown and drop, and it stops itself at every phase boundary.
pub struct FocusTimer {
    state: Arc<Mutex<SessionTimer>>,
    ticker: Option<RepeatingTask>,
    events: broadcast::Sender<TimerEvent>,
    config: TimerConfig,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

impl FocusTimer {
    /// Create a stopped timer.
    pub fn new(config: TimerConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(SessionTimer::new(&config))),
            ticker: None,
            events,
            config,
        }
    }

    /// Receive timer events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<TimerEvent> {
        self.events.subscribe()
    }

    /// Start or resume the countdown. Returns `false` if already running.
    pub async fn start(&mut self) -> bool {
        let (generation, snapshot) = {
            let mut state = self.state.lock().await;
            if !state.start() {
                return false;
            }
            (state.generation(), state.snapshot())
        };

        self.cancel_ticker();
        info!(
            "Timer started: {} phase, {}s left",
            snapshot.phase(),
            snapshot.remaining_secs
        );
        let _ = self.events.send(TimerEvent::Started {
            phase: snapshot.phase(),
            remaining: snapshot.remaining_secs,
        });

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        self.ticker = Some(RepeatingTask::spawn(self.config.tick_interval(), move || {
            let state = Arc::clone(&state);
            let events = events.clone();
            async move { deliver_tick(&state, &events, generation).await }
        }));
        true
    }

    /// Pause the countdown and cancel the pending tick. Returns `false` if
    /// already paused.
    pub async fn pause(&mut self) -> bool {
        let (changed, remaining) = {
            let mut state = self.state.lock().await;
            (state.pause(), state.remaining_secs())
        };
        self.cancel_ticker();
        if changed {
            info!("Timer paused with {}s left", remaining);
            let _ = self.events.send(TimerEvent::Paused { remaining });
        }
        changed
    }

    /// Stop and return to a full focus phase. The focus count is kept.
    pub async fn reset(&mut self) {
        self.state.lock().await.reset();
        self.cancel_ticker();
        info!("Timer reset");
        let _ = self.events.send(TimerEvent::Reset);
    }

    /// Current state.
    pub async fn snapshot(&self) -> TimerSnapshot {
        self.state.lock().await.snapshot()
    }

    /// A ticker is scheduled.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Release the ticker and leave the timer paused. Call when the owning
    /// view goes away.
    pub async fn shutdown(&mut self) {
        self.state.lock().await.pause();
        self.cancel_ticker();
        debug!("Timer shut down");
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

async fn deliver_tick(
    state: &Mutex<SessionTimer>,
    events: &broadcast::Sender<TimerEvent>,
    generation: u64,
) -> ControlFlow<()> {
    let mut state = state.lock().await;
    match state.tick_for(generation) {
        TickOutcome::Ticked { remaining } => {
            trace!("Tick: {}s left", remaining);
            let _ = events.send(TimerEvent::Tick { phase: state.phase(), remaining });
            ControlFlow::Continue(())
        }
        TickOutcome::PhaseCompleted { finished, next } => {
            let completed_focus_count = state.completed_focus_count();
            info!(
                "{} phase completed, {} loaded ({} focus sessions)",
                finished, next, completed_focus_count
            );
            let _ = events.send(TimerEvent::PhaseCompleted {
                finished,
                next,
                completed_focus_count,
            });
            ControlFlow::Break(())
        }
        TickOutcome::Stale => {
            debug!("Discarded stale tick from generation {}", generation);
            ControlFlow::Break(())
        }
        TickOutcome::Idle => ControlFlow::Break(()),
    }
}
