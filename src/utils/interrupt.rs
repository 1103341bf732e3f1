//! Process-lifetime interrupt handling.
//!
//! Termination requests are funnelled into one flag:
//! - SIGINT (Ctrl+C) via ctrlc handler
//! - SIGTERM and SIGHUP via signal_hook
//!
//! A watcher thread polls the flag and runs a single cleanup action when it
//! flips, independent of what the main thread is doing at that moment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

/// How often the watcher checks the interrupted flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Shared interrupted flag plus the handlers that set it.
#[derive(Clone)]
pub struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
}

impl Default for InterruptGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptGuard {
    pub fn new() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register SIGINT, SIGTERM and SIGHUP handlers that set the flag.
    ///
    /// The Ctrl+C handler can only be installed once per process.
    pub fn register_signal_handlers(&self) -> Result<()> {
        let flag = self.interrupted.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .context("Failed to install Ctrl+C handler")?;

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            register(libc::SIGTERM, self.interrupted.clone())
                .context("Failed to install SIGTERM handler")?;
            register(libc::SIGHUP, self.interrupted.clone())
                .context("Failed to install SIGHUP handler")?;
        }

        Ok(())
    }

    /// Whether a termination signal has arrived.
    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Poll the flag for up to `timeout`; true as soon as it is set.
    ///
    /// A child process in our group sees the same Ctrl+C and may exit before
    /// the handler has run, so a failure can arrive ahead of the flag.
    pub fn wait_for(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_interrupted() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Set the flag by hand, as a signal would.
    pub fn trigger(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Spawn the watcher that runs `on_interrupt` once the flag is set.
    ///
    /// `on_interrupt` typically restores the terminal and exits the process.
    pub fn spawn_watcher<F>(&self, on_interrupt: F) -> Result<JoinHandle<()>>
    where
        F: FnOnce() + Send + 'static,
    {
        let flag = self.interrupted.clone();
        thread::Builder::new()
            .name("interrupt-watcher".to_string())
            .spawn(move || {
                while !flag.load(Ordering::SeqCst) {
                    thread::sleep(POLL_INTERVAL);
                }
                debug!("Termination signal received");
                on_interrupt();
            })
            .context("Failed to spawn interrupt watcher")
    }
}
