//! badapple - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use badapple::cli::Cli;
use badapple::player::restore_terminal;
use badapple::utils::interrupt::InterruptGuard;
use badapple::{Config, PlaybackOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if let Some(shell) = cli.completions {
        return commands::completions::handle::<Cli>(shell);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let options = PlaybackOptions::resolve(&cli, &config)?;

    let guard = InterruptGuard::new();
    guard.register_signal_handlers()?;
    guard.spawn_watcher(|| exit_interrupted())?;

    let result = commands::play::handle(&options);
    if result.is_err() && guard.wait_for(INTERRUPT_SETTLE) {
        exit_interrupted();
    }
    result
}

/// How long a failed run waits for a signal that may have caused the failure.
const INTERRUPT_SETTLE: Duration = Duration::from_millis(100);

/// Restore the terminal and exit 0.
fn exit_interrupted() -> ! {
    // Hold the lock so no frame can follow the restore sequence.
    let mut out = io::stdout().lock();
    let _ = restore_terminal(&mut out);
    std::process::exit(0)
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
