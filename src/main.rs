//! Focustick - a terminal focus/break countdown timer
//!
//! Alternates between a focus interval (default 25 minutes) and a break
//! interval (default 5 minutes). The display updates once per second and
//! the timer is controlled with console commands: start, pause, reset,
//! break and quit. When a focus period ends, the break starts on its own
//! after a short delay.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use focustick::cli::{render_event, Cli, Commands, ConsoleCommand, TerminalUi};
use focustick::engine::{Command, TimerRunner};
use focustick::sound::try_create_player;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        TerminalUi::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => run_timer(cli).await,
    }
}

/// Runs the interactive timer until the user quits or stdin closes.
async fn run_timer(cli: Cli) -> Result<()> {
    let config = cli.timer_config();
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (runner, command_tx) = TimerRunner::new(config, event_tx);
    let runner_handle = tokio::spawn(runner.run());

    // Audio is optional; without a device the timer runs silently. The
    // player's output stream is tied to this thread, so events are
    // rendered here on the main task and only the stdin loop is spawned.
    let player = try_create_player(cli.no_sound);

    TerminalUi::show_help();
    let input_handle = tokio::spawn(read_console_commands(command_tx));

    // Ends once the runner exits and drops the event sender.
    while let Some(event) = event_rx.recv().await {
        render_event(&event, player.as_deref());
    }

    input_handle.await.context("input task panicked")??;
    runner_handle.await.context("timer runner panicked")??;

    Ok(())
}

/// Forwards console commands from stdin until the user quits, stdin
/// closes, or the runner goes away.
async fn read_console_commands(command_tx: mpsc::UnboundedSender<Command>) -> Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match ConsoleCommand::parse(&line) {
            Some(ConsoleCommand::Timer(command)) => {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
            Some(ConsoleCommand::Quit) => break,
            Some(ConsoleCommand::Help) => TerminalUi::show_help(),
            None => {
                if !line.trim().is_empty() {
                    TerminalUi::show_unknown(&line);
                }
            }
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
