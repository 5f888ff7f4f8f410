//! Focustick Library
//!
//! This library provides the core functionality for the focustick CLI,
//! a terminal focus/break countdown timer. It includes:
//! - Timer engine: the countdown state machine with auto-transition
//!   between focus and break periods
//! - Scheduler abstraction over the 1 Hz tick and the delayed auto-start
//! - CLI command parsing and terminal rendering
//! - Type definitions for configuration and state
//! - Sound playback for the period-ended notification

pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_time, ControlStates, StatusMessage, TimerConfig, TimerMode, TimerState,
};

// Re-export engine types
pub use engine::{
    Command, ManualScheduler, Scheduler, TimerEngine, TimerEvent, TimerRunner, TokioScheduler,
    Wakeup,
};

// Re-export sound types
pub use sound::{try_create_player, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};
