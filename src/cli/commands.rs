//! Command definitions for the focus timer CLI.
//!
//! Uses clap derive macro for argument parsing, plus the parser for the
//! single-word console commands read from stdin while the timer runs.

use clap::{Parser, Subcommand};

use crate::engine::Command;
use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Focus timer CLI - a terminal focus/break countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "focustick",
    version,
    about = "A terminal focus/break countdown timer",
    long_about = "Alternates between a focus interval and a break interval,\n\
                  updating the display once per second. Control it with the\n\
                  console commands start, pause, reset, break and quit.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Focus duration in seconds (1-86400)
    #[arg(
        long,
        default_value = "1500",
        value_parser = clap::value_parser!(u32).range(1..=86_400)
    )]
    pub focus_secs: u32,

    /// Break duration in seconds (1-3600)
    #[arg(
        long,
        default_value = "300",
        value_parser = clap::value_parser!(u32).range(1..=3_600)
    )]
    pub break_secs: u32,

    /// Disable the period-ended beep
    #[arg(long)]
    pub no_sound: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the timer configuration from the parsed arguments.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::default()
            .with_focus_secs(self.focus_secs)
            .with_break_secs(self.break_secs)
    }
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Console Commands
// ============================================================================

/// A single-word command typed into the running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A command forwarded to the timer engine
    Timer(Command),
    /// Exit the program
    Quit,
    /// Show the command summary
    Help,
}

impl ConsoleCommand {
    /// Parses a console input line. Returns None for unrecognized input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "start" | "s" => Some(Self::Timer(Command::Start)),
            "pause" | "p" => Some(Self::Timer(Command::Pause)),
            "reset" | "r" => Some(Self::Timer(Command::Reset)),
            "break" | "b" => Some(Self::Timer(Command::TriggerBreak)),
            "quit" | "q" | "exit" => Some(Self::Quit),
            "help" | "h" | "?" => Some(Self::Help),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
