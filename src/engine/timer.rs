//! Timer engine for the focus timer.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle/Running × Focus/Break)
//! - Countdown driven by scheduler wakeups
//! - Event emission for display, status, controls and the expiry beep
//! - Delayed auto-start of the break after a focus period expires

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::debug;

use super::scheduler::Scheduler;
use crate::types::{ControlStates, StatusMessage, TimerConfig, TimerMode, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events consumed by the frontend sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown value changed or a new duration was loaded
    Display {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// A transition produced a new status line
    Status(StatusMessage),
    /// A period expired; fired exactly once per expiry
    PeriodEnded {
        /// The mode that just expired
        mode: TimerMode,
    },
    /// Control enablement changed
    Controls(ControlStates),
}

// ============================================================================
// TimerEngine
// ============================================================================

/// The timer state machine.
///
/// Owns all mutable state and the injected [`Scheduler`]. Every operation is
/// total: invalid commands (start while running, pause while idle) are
/// silent no-ops, never errors. The only fallible part is event delivery.
pub struct TimerEngine<S: Scheduler> {
    /// Current timer state
    state: TimerState,
    /// Injected clock access
    scheduler: S,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<S: Scheduler> TimerEngine<S> {
    /// Creates a new engine: idle in focus mode with the full focus duration.
    pub fn new(config: TimerConfig, scheduler: S, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(config),
            scheduler,
            event_tx,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns a reference to the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Emits the initial display and controls refresh.
    ///
    /// Called once by the frontend before any command arrives.
    pub fn refresh(&mut self) -> Result<()> {
        self.emit_display()?;
        self.emit_controls()
    }

    /// Starts the countdown. Silent no-op if already running.
    ///
    /// A manual start preempts any pending delayed auto-start.
    pub fn start(&mut self) -> Result<()> {
        if self.state.running {
            debug!("start ignored: already running");
            return Ok(());
        }

        self.scheduler.cancel_auto_start();
        self.state.running = true;
        self.scheduler.start_ticking();

        let status = match self.state.mode {
            TimerMode::Focus => StatusMessage::StayFocused,
            TimerMode::Break => StatusMessage::BreakRelax,
        };
        debug!(mode = self.state.mode.as_str(), "countdown started");

        self.emit(TimerEvent::Status(status))?;
        self.emit_controls()
    }

    /// Pauses the countdown. Silent no-op if not running.
    ///
    /// Remaining seconds and mode are preserved.
    pub fn pause(&mut self) -> Result<()> {
        if !self.state.running {
            debug!("pause ignored: not running");
            return Ok(());
        }

        self.state.running = false;
        self.scheduler.stop_ticking();
        debug!(remaining = self.state.remaining_seconds, "countdown paused");

        self.emit(TimerEvent::Status(StatusMessage::Paused))?;
        self.emit_controls()
    }

    /// Resets to the initial state. Always succeeds regardless of prior state.
    pub fn reset(&mut self) -> Result<()> {
        self.scheduler.stop_ticking();
        self.scheduler.cancel_auto_start();
        self.state.reset();
        debug!("timer reset");

        self.emit_display()?;
        self.emit(TimerEvent::Status(StatusMessage::FocusTime))?;
        self.emit_controls()
    }

    /// Forces a break and starts it immediately.
    ///
    /// Unconditional override: preempts a running focus countdown and any
    /// pending delayed auto-start.
    pub fn trigger_break(&mut self) -> Result<()> {
        self.scheduler.stop_ticking();
        self.scheduler.cancel_auto_start();
        self.state.running = false;
        self.state.load_mode(TimerMode::Break);
        debug!("break triggered");

        self.emit_display()?;
        self.emit(TimerEvent::Status(StatusMessage::BreakChillOut))?;
        self.start()
    }

    /// Honors a delayed auto-start wakeup.
    ///
    /// A wakeup can already be in the channel when a command cancels the
    /// auto-start, so the wakeup alone is not proof the start is still
    /// wanted. Only starts if the scheduler still reports the auto-start
    /// armed; otherwise the wakeup is discarded.
    pub fn auto_start(&mut self) -> Result<()> {
        if !self.scheduler.auto_start_armed() {
            debug!("stale auto-start wakeup ignored");
            return Ok(());
        }
        debug!("auto-start firing");
        self.start()
    }

    /// Processes one elapsed second.
    ///
    /// Decrements and emits a display update; if the decrement reaches zero
    /// the expiry transition runs within the same tick.
    pub fn tick(&mut self) -> Result<()> {
        if !self.state.running {
            // A wakeup already in the channel when the source was stopped.
            debug!("stale tick ignored");
            return Ok(());
        }

        let completed = self.state.tick();
        self.emit_display()?;

        if completed {
            self.handle_expiry()?;
        }
        Ok(())
    }

    /// Applies the expiry transition for the mode that just ran out.
    fn handle_expiry(&mut self) -> Result<()> {
        self.state.running = false;
        self.scheduler.stop_ticking();

        let expired = self.state.mode;
        self.emit(TimerEvent::PeriodEnded { mode: expired })?;

        match expired {
            TimerMode::Break => {
                // Back to focus; waits for an explicit start.
                debug!("break expired");
                self.emit(TimerEvent::Status(StatusMessage::BreakOver))?;
                self.state.load_mode(TimerMode::Focus);
            }
            TimerMode::Focus => {
                debug!("focus expired, scheduling break auto-start");
                self.emit(TimerEvent::Status(StatusMessage::TimesUp))?;
                self.state.load_mode(TimerMode::Break);
                self.scheduler.schedule_auto_start(Duration::from_secs(
                    self.state.config.auto_start_delay_secs,
                ));
            }
        }

        self.emit_display()?;
        self.emit_controls()
    }

    /// Sends an event to the frontend.
    fn emit(&self, event: TimerEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("failed to send timer event")
    }

    /// Emits a display update with the current remaining seconds.
    fn emit_display(&self) -> Result<()> {
        self.emit(TimerEvent::Display {
            remaining_seconds: self.state.remaining_seconds,
        })
    }

    /// Emits the control enablement for the current state.
    fn emit_controls(&self) -> Result<()> {
        self.emit(TimerEvent::Controls(ControlStates::for_state(&self.state)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scheduler::ManualScheduler;

    fn create_engine() -> (
        TimerEngine<ManualScheduler>,
        mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        create_engine_with_config(TimerConfig::default())
    }

    fn create_engine_with_config(
        config: TimerConfig,
    ) -> (
        TimerEngine<ManualScheduler>,
        mpsc::UnboundedReceiver<TimerEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(config, ManualScheduler::new(), tx);
        (engine, rx)
    }

    /// Drains all queued events.
    fn drain(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // ------------------------------------------------------------------------
    // Construction Tests
    // ------------------------------------------------------------------------

    mod construction_tests {
        use super::*;

        #[test]
        fn test_new_engine_idle_focus() {
            let (engine, _rx) = create_engine();
            let state = engine.state();

            assert_eq!(state.mode, TimerMode::Focus);
            assert_eq!(state.remaining_seconds, 1500);
            assert!(!state.running);
            assert!(!engine.scheduler().is_ticking());
            assert!(engine.scheduler().pending_auto_start().is_none());
        }

        #[test]
        fn test_refresh_emits_display_and_controls() {
            let (mut engine, mut rx) = create_engine();
            engine.refresh().unwrap();

            let events = drain(&mut rx);
            assert_eq!(
                events,
                vec![
                    TimerEvent::Display {
                        remaining_seconds: 1500
                    },
                    TimerEvent::Controls(ControlStates::for_state(engine.state())),
                ]
            );
        }
    }

    // ------------------------------------------------------------------------
    // Start Tests
    // ------------------------------------------------------------------------

    mod start_tests {
        use super::*;

        #[test]
        fn test_start_begins_ticking() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();

            assert!(engine.state().running);
            assert!(engine.scheduler().is_ticking());

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::StayFocused)));
        }

        #[test]
        fn test_start_in_break_mode_emits_break_status() {
            let (mut engine, mut rx) = create_engine();
            engine.trigger_break().unwrap();
            engine.pause().unwrap();
            drain(&mut rx);

            engine.start().unwrap();

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::BreakRelax)));
        }

        #[test]
        fn test_start_twice_is_idempotent() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            let after_first = engine.state().clone();
            drain(&mut rx);

            engine.start().unwrap();

            assert_eq!(engine.state().remaining_seconds, after_first.remaining_seconds);
            assert_eq!(engine.state().mode, after_first.mode);
            assert!(engine.state().running);
            // Second start is a silent no-op: no events.
            assert!(drain(&mut rx).is_empty());
        }

        #[test]
        fn test_start_does_not_reload_duration() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..100 {
                engine.tick().unwrap();
            }
            engine.pause().unwrap();
            engine.start().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1400);
        }

        #[test]
        fn test_manual_start_cancels_pending_auto_start() {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();
            assert!(engine.scheduler().pending_auto_start().is_some());

            engine.start().unwrap();
            assert!(engine.scheduler().pending_auto_start().is_none());
            assert!(engine.state().running);
        }
    }

    // ------------------------------------------------------------------------
    // Pause Tests
    // ------------------------------------------------------------------------

    mod pause_tests {
        use super::*;

        #[test]
        fn test_pause_stops_ticking_and_preserves_state() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..10 {
                engine.tick().unwrap();
            }
            drain(&mut rx);

            engine.pause().unwrap();

            assert!(!engine.state().running);
            assert!(!engine.scheduler().is_ticking());
            assert_eq!(engine.state().remaining_seconds, 1490);
            assert_eq!(engine.state().mode, TimerMode::Focus);

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::Paused)));
        }

        #[test]
        fn test_pause_while_idle_is_noop() {
            let (mut engine, mut rx) = create_engine();

            engine.pause().unwrap();

            assert!(!engine.state().running);
            assert!(drain(&mut rx).is_empty());
        }

        #[test]
        fn test_pause_then_start_resumes_from_same_value() {
            let config = TimerConfig::default().with_focus_secs(20);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            for _ in 0..10 {
                engine.tick().unwrap();
            }
            assert_eq!(engine.state().remaining_seconds, 10);

            engine.pause().unwrap();
            engine.start().unwrap();

            assert_eq!(engine.state().remaining_seconds, 10);
            assert!(engine.state().running);
        }
    }

    // ------------------------------------------------------------------------
    // Reset Tests
    // ------------------------------------------------------------------------

    mod reset_tests {
        use super::*;

        #[test]
        fn test_reset_from_fresh_engine() {
            let (mut engine, mut rx) = create_engine();

            engine.reset().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::FocusTime)));
            assert!(events.contains(&TimerEvent::Display {
                remaining_seconds: 1500
            }));
        }

        #[test]
        fn test_reset_from_running_focus() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..42 {
                engine.tick().unwrap();
            }

            engine.reset().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);
            assert!(!engine.scheduler().is_ticking());
        }

        #[test]
        fn test_reset_from_running_break() {
            let (mut engine, _rx) = create_engine();

            engine.trigger_break().unwrap();
            engine.tick().unwrap();

            engine.reset().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);
        }

        #[test]
        fn test_reset_cancels_pending_auto_start() {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();
            assert!(engine.scheduler().pending_auto_start().is_some());

            engine.reset().unwrap();

            assert!(engine.scheduler().pending_auto_start().is_none());
            assert!(!engine.scheduler().is_ticking());
        }
    }

    // ------------------------------------------------------------------------
    // TriggerBreak Tests
    // ------------------------------------------------------------------------

    mod trigger_break_tests {
        use super::*;

        #[test]
        fn test_trigger_break_preempts_running_focus() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..100 {
                engine.tick().unwrap();
            }
            drain(&mut rx);

            engine.trigger_break().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Break);
            assert_eq!(engine.state().remaining_seconds, 300);
            assert!(engine.state().running);
            assert!(engine.scheduler().is_ticking());

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::BreakChillOut)));
            assert!(events.contains(&TimerEvent::Status(StatusMessage::BreakRelax)));
            assert!(events.contains(&TimerEvent::Display {
                remaining_seconds: 300
            }));
        }

        #[test]
        fn test_trigger_break_from_idle() {
            let (mut engine, _rx) = create_engine();

            engine.trigger_break().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Break);
            assert_eq!(engine.state().remaining_seconds, 300);
            assert!(engine.state().running);
        }

        #[test]
        fn test_trigger_break_from_idle_break_reloads_duration() {
            let (mut engine, _rx) = create_engine();

            engine.trigger_break().unwrap();
            for _ in 0..50 {
                engine.tick().unwrap();
            }
            engine.pause().unwrap();

            engine.trigger_break().unwrap();

            assert_eq!(engine.state().remaining_seconds, 300);
            assert!(engine.state().running);
        }

        #[test]
        fn test_trigger_break_cancels_pending_auto_start() {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();
            assert!(engine.scheduler().pending_auto_start().is_some());

            engine.trigger_break().unwrap();

            assert!(engine.scheduler().pending_auto_start().is_none());
            assert!(engine.state().running);
        }
    }

    // ------------------------------------------------------------------------
    // AutoStart Tests
    // ------------------------------------------------------------------------

    mod auto_start_tests {
        use super::*;

        fn engine_with_expired_focus() -> (
            TimerEngine<ManualScheduler>,
            mpsc::UnboundedReceiver<TimerEvent>,
        ) {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, rx) = create_engine_with_config(config);
            engine.start().unwrap();
            engine.tick().unwrap();
            assert!(engine.scheduler().pending_auto_start().is_some());
            (engine, rx)
        }

        #[test]
        fn test_auto_start_begins_the_break_when_armed() {
            let (mut engine, mut rx) = engine_with_expired_focus();
            drain(&mut rx);

            engine.auto_start().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Break);
            assert!(engine.state().running);
            assert!(engine.scheduler().pending_auto_start().is_none());
            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::Status(StatusMessage::BreakRelax)));
        }

        #[test]
        fn test_auto_start_after_reset_is_ignored() {
            let (mut engine, mut rx) = engine_with_expired_focus();

            // The wakeup may already be queued when reset cancels the
            // auto-start; honoring it later must not start anything.
            engine.reset().unwrap();
            drain(&mut rx);

            engine.auto_start().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);
            assert!(!engine.scheduler().is_ticking());
            assert!(drain(&mut rx).is_empty());
        }

        #[test]
        fn test_auto_start_after_trigger_break_is_ignored() {
            let (mut engine, mut rx) = engine_with_expired_focus();

            engine.trigger_break().unwrap();
            engine.tick().unwrap();
            drain(&mut rx);

            engine.auto_start().unwrap();

            // The forced break keeps counting down undisturbed.
            assert_eq!(engine.state().remaining_seconds, 299);
            assert!(engine.state().running);
            assert!(drain(&mut rx).is_empty());
        }

        #[tokio::test]
        async fn test_queued_wakeup_is_dropped_when_cancel_comes_after_delivery() {
            use crate::engine::scheduler::{TokioScheduler, Wakeup};
            use tokio::time::{timeout, Duration};

            // Aborting the sender task after it already queued its wakeup is
            // a no-op, so the cancellation has to hold at consumption time.
            let (wake_tx, mut wake_rx) = mpsc::unbounded_channel();
            let (event_tx, _event_rx) = mpsc::unbounded_channel();
            let config = TimerConfig {
                focus_secs: 1,
                break_secs: 300,
                auto_start_delay_secs: 0,
            };
            let mut engine = TimerEngine::new(config, TokioScheduler::new(wake_tx), event_tx);

            engine.start().unwrap();
            engine.tick().unwrap();

            // Zero delay: the wakeup lands in the channel almost at once.
            timeout(Duration::from_secs(1), async {
                loop {
                    match wake_rx.recv().await {
                        Some(Wakeup::AutoStart) => break,
                        Some(_) => continue,
                        None => panic!("wake channel closed"),
                    }
                }
            })
            .await
            .expect("auto-start wakeup should be delivered");

            engine.reset().unwrap();
            engine.auto_start().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);
        }
    }

    // ------------------------------------------------------------------------
    // Tick and Expiry Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_tick_decrements_and_emits_display() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            drain(&mut rx);

            engine.tick().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1499);
            let events = drain(&mut rx);
            assert_eq!(
                events,
                vec![TimerEvent::Display {
                    remaining_seconds: 1499
                }]
            );
        }

        #[test]
        fn test_tick_while_idle_is_ignored() {
            let (mut engine, mut rx) = create_engine();

            engine.tick().unwrap();

            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(drain(&mut rx).is_empty());
        }

        #[test]
        fn test_focus_expiry_transitions_to_idle_break() {
            let config = TimerConfig::default().with_focus_secs(3);
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.start().unwrap();
            drain(&mut rx);

            for _ in 0..3 {
                engine.tick().unwrap();
            }

            assert_eq!(engine.state().mode, TimerMode::Break);
            assert_eq!(engine.state().remaining_seconds, 300);
            assert!(!engine.state().running);
            assert!(!engine.scheduler().is_ticking());
            assert_eq!(
                engine.scheduler().pending_auto_start(),
                Some(Duration::from_secs(3))
            );

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::PeriodEnded {
                mode: TimerMode::Focus
            }));
            assert!(events.contains(&TimerEvent::Status(StatusMessage::TimesUp)));
            assert!(events.contains(&TimerEvent::Display {
                remaining_seconds: 300
            }));
        }

        #[test]
        fn test_break_expiry_transitions_to_idle_focus_without_auto_start() {
            let config = TimerConfig::default().with_break_secs(2);
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.trigger_break().unwrap();
            drain(&mut rx);

            for _ in 0..2 {
                engine.tick().unwrap();
            }

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 1500);
            assert!(!engine.state().running);
            assert!(engine.scheduler().pending_auto_start().is_none());

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::PeriodEnded {
                mode: TimerMode::Break
            }));
            assert!(events.contains(&TimerEvent::Status(StatusMessage::BreakOver)));
        }

        #[test]
        fn test_expiry_happens_within_the_zero_tick() {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();

            // One tick from remaining=1: decrement to zero and transition,
            // all within the same tick.
            assert!(!engine.state().running);
            assert_eq!(engine.state().mode, TimerMode::Break);
        }

        #[test]
        fn test_period_ended_fires_exactly_once() {
            let config = TimerConfig::default().with_focus_secs(2);
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();
            engine.tick().unwrap();
            // Stale wakeups after expiry must not re-fire.
            engine.tick().unwrap();
            engine.tick().unwrap();

            let ended = drain(&mut rx)
                .into_iter()
                .filter(|e| matches!(e, TimerEvent::PeriodEnded { .. }))
                .count();
            assert_eq!(ended, 1);
        }

        #[test]
        fn test_expiry_event_order() {
            let config = TimerConfig::default().with_focus_secs(1);
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.start().unwrap();
            drain(&mut rx);
            engine.tick().unwrap();

            let events = drain(&mut rx);
            assert_eq!(
                events,
                vec![
                    TimerEvent::Display {
                        remaining_seconds: 0
                    },
                    TimerEvent::PeriodEnded {
                        mode: TimerMode::Focus
                    },
                    TimerEvent::Status(StatusMessage::TimesUp),
                    TimerEvent::Display {
                        remaining_seconds: 300
                    },
                    TimerEvent::Controls(ControlStates::for_state(engine.state())),
                ]
            );
        }

        #[test]
        fn test_full_cycle_focus_break_focus() {
            let config = TimerConfig::default()
                .with_focus_secs(2)
                .with_break_secs(2);
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();
            engine.tick().unwrap();
            engine.tick().unwrap();
            assert_eq!(engine.state().mode, TimerMode::Break);

            // Auto-start fires: runner would call start().
            engine.start().unwrap();
            engine.tick().unwrap();
            engine.tick().unwrap();

            assert_eq!(engine.state().mode, TimerMode::Focus);
            assert_eq!(engine.state().remaining_seconds, 2);
            assert!(!engine.state().running);
            assert!(engine.scheduler().pending_auto_start().is_none());
        }
    }

    // ------------------------------------------------------------------------
    // Control Enablement Tests
    // ------------------------------------------------------------------------

    mod controls_tests {
        use super::*;

        #[test]
        fn test_controls_recomputed_after_every_transition() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.pause().unwrap();
            engine.reset().unwrap();
            engine.trigger_break().unwrap();

            let controls: Vec<ControlStates> = drain(&mut rx)
                .into_iter()
                .filter_map(|e| match e {
                    TimerEvent::Controls(c) => Some(c),
                    _ => None,
                })
                .collect();

            // start, pause, reset, trigger_break(+inner start)
            assert_eq!(controls.len(), 4);
            assert!(!controls[0].start && controls[0].pause);
            assert!(controls[1].start && !controls[1].pause);
            assert!(controls[2].start && !controls[2].pause);
            assert!(!controls[3].start && !controls[3].take_break);
        }
    }
}
