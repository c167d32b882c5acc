//! Repeating tick timer
//!
//! `TickTimer` owns a tokio task that calls a tick callback at a fixed
//! cadence. The task is aborted when the timer is released or dropped, so a
//! timer can never outlive its owner.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Whether the tick task should keep running after a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Handle to a running tick task
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct TickTimer {
    handle: JoinHandle<()>,
    interval: Duration,
}

impl TickTimer {
    /// Spawn a tick task on `runtime`
    ///
    /// The first tick fires one full `interval` after spawning, never
    /// immediately. The task ends when `on_tick` returns `TickFlow::Stop`.
    pub fn spawn<F>(runtime: &Handle, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickFlow + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if on_tick() == TickFlow::Stop {
                    break;
                }
            }
        });

        Self { handle, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the tick task has ended (stopped itself or was aborted)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let _timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(500), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TickFlow::Continue
        });

        time::sleep(Duration::from_millis(250)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_flow_ends_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(100), move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                TickFlow::Stop
            } else {
                TickFlow::Continue
            }
        });

        time::sleep(Duration::from_millis(1_050)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let timer = TickTimer::spawn(&Handle::current(), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TickFlow::Continue
        });

        time::sleep(Duration::from_millis(150)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(timer);
        time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
