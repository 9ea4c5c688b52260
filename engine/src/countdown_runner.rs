//! Countdown Runner - background thread that polls the gathering state at
//! regular intervals
//!
//! The core never schedules its own callbacks; this driver re-reads phase
//! and time-to-start from the wall clock on a fixed cadence, rolls the
//! schedule forward past closed instances, and hands a snapshot to the
//! callback for display.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::Engine;
use crate::gathering::Phase;

/// Snapshot handed to the tick callback.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionTick {
    pub phase: Phase,
    /// Always present here: closed instances are rolled to the next
    /// occurrence before the snapshot is taken.
    pub seconds_to_start: Option<i64>,
    pub participants: u32,
    pub rolled_over: u32,
}

/// Runner that manages a background polling thread.
pub struct CountdownRunner {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl CountdownRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start polling at `interval_ms` intervals.
    ///
    /// # Arguments
    /// * `engine` - Shared engine whose schedule drives the snapshots
    /// * `interval_ms` - Milliseconds between polls (e.g. 1000 for a
    ///   once-per-second display countdown)
    /// * `callback` - Receives each `SessionTick` (for re-rendering)
    pub fn start<F>(&mut self, engine: Arc<Mutex<Engine>>, interval_ms: u64, callback: F)
    where
        F: Fn(SessionTick) + Send + 'static,
    {
        if self.is_running.load(Ordering::Relaxed) {
            warn!("countdown runner already running");
            return;
        }

        info!(interval_ms, "starting countdown runner");
        self.is_running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let tick = {
                    let mut e = engine.lock().unwrap();
                    let now = Utc::now();
                    let rolled_over = e.roll_forward(now);
                    let session = e.schedule.current();
                    SessionTick {
                        phase: session.phase(now),
                        seconds_to_start: session
                            .time_until_start(now)
                            .map(|d| d.num_seconds()),
                        participants: session.participants().len() as u32,
                        rolled_over,
                    }
                };

                callback(tick);

                thread::sleep(Duration::from_millis(interval_ms));
            }
            info!("countdown runner thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    /// Stop polling and join the thread.
    pub fn stop(&mut self) {
        if !self.is_running.load(Ordering::Relaxed) {
            return;
        }

        info!("stopping countdown runner...");
        self.is_running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join(); // Thread panic result intentionally ignored during shutdown
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }
}

impl Default for CountdownRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gathering::GatheringSession;
    use crate::model::ListingId;
    use chrono::Duration as ChronoDuration;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn runner_polls_on_cadence() {
        let session =
            GatheringSession::with_defaults(Utc::now() + ChronoDuration::days(3), ListingId(1));
        let engine = Arc::new(Mutex::new(Engine::new(session)));

        let tick_count = Arc::new(AtomicU32::new(0));
        let tick_count_clone = Arc::clone(&tick_count);

        let mut runner = CountdownRunner::new();
        runner.start(Arc::clone(&engine), 50, move |tick| {
            assert_eq!(tick.phase, Phase::Enrolling);
            assert!(tick.seconds_to_start.unwrap() > 0);
            tick_count_clone.fetch_add(1, Ordering::Relaxed);
        });
        assert!(runner.is_running());

        thread::sleep(Duration::from_millis(300));
        runner.stop();
        assert!(!runner.is_running());

        let count = tick_count.load(Ordering::Relaxed);
        assert!(count >= 3, "expected at least 3 ticks, got {count}");
    }

    #[test]
    fn runner_rolls_a_closed_session_before_snapshotting() {
        let session =
            GatheringSession::with_defaults(Utc::now() - ChronoDuration::hours(1), ListingId(1));
        let engine = Arc::new(Mutex::new(Engine::new(session)));

        let saw_rollover = Arc::new(AtomicBool::new(false));
        let saw_rollover_clone = Arc::clone(&saw_rollover);

        let mut runner = CountdownRunner::new();
        runner.start(Arc::clone(&engine), 50, move |tick| {
            if tick.rolled_over > 0 {
                assert_ne!(tick.phase, Phase::Closed);
                saw_rollover_clone.store(true, Ordering::Relaxed);
            }
        });

        thread::sleep(Duration::from_millis(200));
        runner.stop();
        assert!(saw_rollover.load(Ordering::Relaxed));
    }
}
