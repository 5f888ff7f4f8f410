//! CLI argument parsing and terminal frontend.

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, ConsoleCommand};
pub use display::{render_event, TerminalUi};
