//! Terminal rendering for the focus timer.
//!
//! This module is the display, status and notification sink: it maps
//! [`TimerEvent`]s to console output and the period-ended beep. Sound
//! failures are logged and swallowed; they never affect the countdown.

use tracing::warn;

use crate::engine::TimerEvent;
use crate::sound::SoundPlayer;
use crate::types::{format_time, ControlStates, StatusMessage};

// ============================================================================
// TerminalUi
// ============================================================================

/// Console output for the running timer.
pub struct TerminalUi;

impl TerminalUi {
    /// Shows the countdown value (already formatted as `MM:SS`).
    pub fn show_time(formatted: &str) {
        println!("  {}", formatted);
    }

    /// Shows a status line.
    pub fn show_status(status: StatusMessage) {
        println!("-- {}", status);
    }

    /// Shows which controls are currently available.
    pub fn show_controls(controls: &ControlStates) {
        let mut available = Vec::new();
        if controls.start {
            available.push("start");
        }
        if controls.pause {
            available.push("pause");
        }
        if controls.reset {
            available.push("reset");
        }
        if controls.take_break {
            available.push("break");
        }
        println!("   [{}]", available.join(" | "));
    }

    /// Shows the console command summary.
    pub fn show_help() {
        println!("commands: start (s), pause (p), reset (r), break (b), quit (q)");
    }

    /// Shows a notice for unrecognized console input.
    pub fn show_unknown(input: &str) {
        println!("unknown command: {} (type 'help' for commands)", input.trim());
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Event Rendering
// ============================================================================

/// Renders one timer event to the terminal sinks.
///
/// `sound` is the notification sink; `None` means audio is unavailable and
/// expiries are silent.
pub fn render_event<P: SoundPlayer>(event: &TimerEvent, sound: Option<&P>) {
    match event {
        TimerEvent::Display { remaining_seconds } => {
            TerminalUi::show_time(&format_time(*remaining_seconds));
        }
        TimerEvent::Status(status) => {
            TerminalUi::show_status(*status);
        }
        TimerEvent::Controls(controls) => {
            TerminalUi::show_controls(controls);
        }
        TimerEvent::PeriodEnded { mode } => {
            if let Some(player) = sound {
                if let Err(e) = player.play() {
                    warn!(mode = mode.as_str(), "notification sound failed: {}", e);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
