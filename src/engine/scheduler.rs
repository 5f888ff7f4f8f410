//! Scheduler abstraction for the timer engine.
//!
//! The engine never touches the clock directly. It asks a [`Scheduler`] to
//! run the 1 Hz tick source and to arm the single delayed auto-start, and
//! the scheduler delivers [`Wakeup`] messages back through a channel. This
//! keeps the engine a pure state machine and makes the 1500-tick and
//! 3-second-delay paths testable without wall-clock waits.
//!
//! Two implementations are provided:
//! - [`TokioScheduler`] — production, backed by spawned tokio tasks
//! - [`ManualScheduler`] — bookkeeping fake for tests

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

// ============================================================================
// Wakeup
// ============================================================================

/// Messages a scheduler delivers back to the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// One second elapsed while the tick source is active
    Tick,
    /// The delayed auto-start fired
    AutoStart,
}

// ============================================================================
// Scheduler
// ============================================================================

/// Clock access for the timer engine.
///
/// Invariant: at most one tick source and at most one pending auto-start
/// exist at any time. Arming either one replaces the previous instance, so
/// two countdown sources can never run concurrently.
pub trait Scheduler {
    /// Starts (or restarts) the 1 Hz tick source.
    fn start_ticking(&mut self);

    /// Stops the tick source. No-op if it is not active.
    fn stop_ticking(&mut self);

    /// Arms (or re-arms) the delayed auto-start.
    fn schedule_auto_start(&mut self, delay: Duration);

    /// Cancels the pending auto-start. No-op if none is pending.
    fn cancel_auto_start(&mut self);

    /// Reports whether an auto-start is still armed.
    ///
    /// Stays true after the wakeup has been delivered until the auto-start
    /// is consumed or cancelled. The driver loop uses this to discard a
    /// wakeup that was already in flight when a command cancelled the
    /// auto-start; aborting the finished sender task cannot recall it.
    fn auto_start_armed(&self) -> bool;
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Production scheduler backed by spawned tokio tasks.
///
/// Each source is a task sending [`Wakeup`] messages over an unbounded
/// channel; stale tasks are aborted before a replacement is spawned.
pub struct TokioScheduler {
    /// Wakeup sender shared with the driver loop
    wake_tx: mpsc::UnboundedSender<Wakeup>,
    /// Handle of the active tick task
    tick_task: Option<JoinHandle<()>>,
    /// Handle of the pending auto-start task
    auto_start_task: Option<JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates a scheduler delivering wakeups to the given sender.
    pub fn new(wake_tx: mpsc::UnboundedSender<Wakeup>) -> Self {
        Self {
            wake_tx,
            tick_task: None,
            auto_start_task: None,
        }
    }
}

impl Scheduler for TokioScheduler {
    fn start_ticking(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
        }

        let wake_tx = self.wake_tx.clone();
        self.tick_task = Some(tokio::spawn(async move {
            // First tick fires one full period from now, not immediately.
            let period = Duration::from_secs(1);
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if wake_tx.send(Wakeup::Tick).is_err() {
                    break;
                }
            }
        }));

        debug!("tick source started");
    }

    fn stop_ticking(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
            debug!("tick source stopped");
        }
    }

    fn schedule_auto_start(&mut self, delay: Duration) {
        if let Some(task) = self.auto_start_task.take() {
            task.abort();
        }

        let wake_tx = self.wake_tx.clone();
        self.auto_start_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = wake_tx.send(Wakeup::AutoStart);
        }));

        debug!(delay_secs = delay.as_secs(), "auto-start scheduled");
    }

    fn cancel_auto_start(&mut self) {
        if let Some(task) = self.auto_start_task.take() {
            task.abort();
            debug!("pending auto-start cancelled");
        }
    }

    fn auto_start_armed(&self) -> bool {
        // The handle is kept even after the task has sent its wakeup, so a
        // delivered-but-unprocessed wakeup still counts as armed.
        self.auto_start_task.is_some()
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.stop_ticking();
        self.cancel_auto_start();
    }
}

impl std::fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("ticking", &self.tick_task.is_some())
            .field("auto_start_pending", &self.auto_start_task.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

/// Bookkeeping scheduler for tests.
///
/// Records what the engine asked for instead of touching the clock. Tests
/// drive the engine by calling `tick()` / `start()` directly and assert on
/// the recorded state.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    ticking: bool,
    pending_auto_start: Option<Duration>,
}

impl ManualScheduler {
    /// Creates an inactive scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the tick source is active.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Returns the delay of the pending auto-start, if one is armed.
    pub fn pending_auto_start(&self) -> Option<Duration> {
        self.pending_auto_start
    }
}

impl Scheduler for ManualScheduler {
    fn start_ticking(&mut self) {
        self.ticking = true;
    }

    fn stop_ticking(&mut self) {
        self.ticking = false;
    }

    fn schedule_auto_start(&mut self, delay: Duration) {
        self.pending_auto_start = Some(delay);
    }

    fn cancel_auto_start(&mut self) {
        self.pending_auto_start = None;
    }

    fn auto_start_armed(&self) -> bool {
        self.pending_auto_start.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
