//! Core data types for the focus timer.
//!
//! This module defines the data structures used for:
//! - Timer state management
//! - Timer configuration with validation
//! - Status messages and control enablement shared with the frontend

use std::fmt;

// ============================================================================
// TimerMode
// ============================================================================

/// The duration class the timer is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    /// Primary work interval
    Focus,
    /// Rest interval
    Break,
}

impl TimerMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::Break => "break",
        }
    }
}

impl Default for TimerMode {
    fn default() -> Self {
        TimerMode::Focus
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the focus timer.
///
/// Durations are fixed at construction; nothing mutates them at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Focus duration in seconds (1-86400)
    pub focus_secs: u32,
    /// Break duration in seconds (1-3600)
    pub break_secs: u32,
    /// Delay before the break auto-starts after a focus period expires
    pub auto_start_delay_secs: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            break_secs: 5 * 60,
            auto_start_delay_secs: 3,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified focus duration.
    pub fn with_focus_secs(mut self, secs: u32) -> Self {
        self.focus_secs = secs;
        self
    }

    /// Creates a new configuration with the specified break duration.
    pub fn with_break_secs(mut self, secs: u32) -> Self {
        self.break_secs = secs;
        self
    }

    /// Returns the duration loaded when (re)starting the given mode.
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::Break => self.break_secs,
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.focus_secs < 1 || self.focus_secs > 86_400 {
            return Err("focus duration must be between 1 and 86400 seconds".to_string());
        }
        if self.break_secs < 1 || self.break_secs > 3_600 {
            return Err("break duration must be between 1 and 3600 seconds".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// The current state of the timer.
#[derive(Debug, Clone)]
pub struct TimerState {
    /// Which duration class is active
    pub mode: TimerMode,
    /// Remaining seconds in the current period
    pub remaining_seconds: u32,
    /// Whether the periodic tick source is active
    pub running: bool,
    /// Timer configuration
    pub config: TimerConfig,
}

impl TimerState {
    /// Creates a new state: idle in focus mode with the full focus duration.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_seconds: config.focus_secs,
            running: false,
            config,
        }
    }

    /// Loads the given mode's full duration and makes it the active mode.
    pub fn load_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.remaining_seconds = self.config.duration_for(mode);
    }

    /// Resets to the initial state: idle focus with the full focus duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.load_mode(TimerMode::Focus);
    }

    /// Decrements the counter by one second.
    ///
    /// Returns true if the period has completed (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// StatusMessage
// ============================================================================

/// Human-readable status lines emitted on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Focus period is counting down
    StayFocused,
    /// Break period is counting down
    BreakRelax,
    /// Countdown suspended, state preserved
    Paused,
    /// Back to the initial focus state
    FocusTime,
    /// Break forced by the user
    BreakChillOut,
    /// Break period expired
    BreakOver,
    /// Focus period expired
    TimesUp,
}

impl StatusMessage {
    /// Returns the display text for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMessage::StayFocused => "Stay Focused!",
            StatusMessage::BreakRelax => "Break Time — Relax!",
            StatusMessage::Paused => "Paused...",
            StatusMessage::FocusTime => "Focus Time",
            StatusMessage::BreakChillOut => "Break Time — Chill Out!",
            StatusMessage::BreakOver => "Break's over! Let's focus again!",
            StatusMessage::TimesUp => "Time's up! Take a short break!",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ControlStates
// ============================================================================

/// Enablement of the four manual controls.
///
/// A pure function of the timer state, recomputed after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlStates {
    /// Start is available while idle
    pub start: bool,
    /// Pause is available while running
    pub pause: bool,
    /// Reset is always available
    pub reset: bool,
    /// Forcing a break is available unless a break is already running
    pub take_break: bool,
}

impl ControlStates {
    /// Computes control enablement from the current timer state.
    pub fn for_state(state: &TimerState) -> Self {
        Self {
            start: !state.running,
            pause: state.running,
            reset: true,
            take_break: !(state.running && state.mode == TimerMode::Break),
        }
    }
}

// ============================================================================
// Time Formatting
// ============================================================================

/// Formats a second count as zero-padded `MM:SS`.
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

// ============================================================================
// Tests
// ============================================================================
