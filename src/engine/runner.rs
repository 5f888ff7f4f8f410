//! Async driver loop for the timer engine.
//!
//! The runner owns the engine and is the only place that mutates it, so
//! scheduler wakeups and user commands are applied strictly sequentially:
//! a tick's transition logic always completes before the next message is
//! taken off the channels.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::scheduler::{TokioScheduler, Wakeup};
use super::timer::{TimerEngine, TimerEvent};
use crate::types::TimerConfig;

// ============================================================================
// Command
// ============================================================================

/// Inbound user commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin or resume the countdown
    Start,
    /// Suspend the countdown, preserving state
    Pause,
    /// Return to the initial idle focus state
    Reset,
    /// Force a break and start it immediately
    TriggerBreak,
}

// ============================================================================
// TimerRunner
// ============================================================================

/// Drives a [`TimerEngine`] from scheduler wakeups and user commands.
pub struct TimerRunner {
    engine: TimerEngine<TokioScheduler>,
    wake_rx: mpsc::UnboundedReceiver<Wakeup>,
    command_rx: mpsc::UnboundedReceiver<Command>,
}

impl TimerRunner {
    /// Creates a runner and its engine.
    ///
    /// Returns the runner together with the command sender the frontend uses
    /// to submit [`Command`]s.
    pub fn new(
        config: TimerConfig,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> (Self, mpsc::UnboundedSender<Command>) {
        let (wake_tx, wake_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(config, TokioScheduler::new(wake_tx), event_tx);

        (
            Self {
                engine,
                wake_rx,
                command_rx,
            },
            command_tx,
        )
    }

    /// Runs the driver loop until the command channel closes.
    pub async fn run(mut self) -> Result<()> {
        info!("timer runner started");
        self.engine.refresh()?;

        loop {
            tokio::select! {
                Some(wakeup) = self.wake_rx.recv() => {
                    match wakeup {
                        Wakeup::Tick => self.engine.tick()?,
                        Wakeup::AutoStart => self.engine.auto_start()?,
                    }
                }
                command = self.command_rx.recv() => {
                    match command {
                        Some(command) => self.apply(command)?,
                        None => break,
                    }
                }
            }
        }

        info!("timer runner stopped");
        Ok(())
    }

    /// Dispatches a user command to the engine.
    fn apply(&mut self, command: Command) -> Result<()> {
        debug!(?command, "applying command");
        match command {
            Command::Start => self.engine.start(),
            Command::Pause => self.engine.pause(),
            Command::Reset => self.engine.reset(),
            Command::TriggerBreak => self.engine.trigger_break(),
        }
    }
}

impl std::fmt::Debug for TimerRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRunner")
            .field("state", self.engine.state())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
