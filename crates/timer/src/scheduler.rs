//! Cancelable repeating task.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Runs an async callback every `period` on the tokio runtime.
///
/// Each run is scheduled relative to the end of the previous one, so drift
/// accumulates under load. The callback stops the task by returning
/// [`ControlFlow::Break`]. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct RepeatingTask {
    handle: JoinHandle<()>,
}

impl RepeatingTask {
    /// Spawn the task. The first call happens one `period` from now.
    pub fn spawn<F, Fut>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if callback().await.is_break() {
                    trace!("Repeating task finished");
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Cancel the task. No further callbacks start after this returns.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// The task stopped itself or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(period: Duration, stop_after: usize) -> (RepeatingTask, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task = RepeatingTask::spawn(period, move || {
            let counter = Arc::clone(&counter);
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n >= stop_after {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        });
        (task, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_once_per_period() {
        let (_task, calls) = counting_task(Duration::from_secs(1), usize::MAX);
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_break_stops_task() {
        let (task, calls) = counting_task(Duration::from_secs(1), 2);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_pending_run() {
        let (task, calls) = counting_task(Duration::from_secs(1), usize::MAX);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        task.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (task, calls) = counting_task(Duration::from_secs(1), usize::MAX);
        drop(task);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
