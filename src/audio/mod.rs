//! Audio playback through an external system player.
//!
//! The clip is never decoded here. Each playback writes it to a temp file and
//! runs the player command with that path as its last argument:
//!
//! - [`AudioPlayer::play_blocking`] waits for the player and removes the file
//! - [`AudioPlayer::play_detached`] returns right after launch; a background
//!   thread reaps the player and removes the file
//!
//! # Example
//!
//! ```ignore
//! use badapple::audio::{AudioPlayer, PlayerCommand};
//! use badapple::assets::AUDIO_WAV;
//!
//! AudioPlayer::new(AUDIO_WAV, PlayerCommand::default()).play_blocking()?;
//! ```

mod clip;

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tempfile::TempPath;
use tracing::{debug, warn};

use crate::error::PlayerError;

/// External program used to play the clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    /// Program name, resolved through `PATH`.
    pub program: String,
    /// Arguments placed before the clip path.
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Build the process invocation for `clip`. Stdout and stderr are inherited.
    fn build(&self, clip: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(clip);
        cmd
    }
}

impl Default for PlayerCommand {
    /// `afplay` on macOS, quiet `aplay` elsewhere.
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("afplay")
        } else {
            Self::new("aplay").with_args(["-q"])
        }
    }
}

/// Plays one clip with one player command.
pub struct AudioPlayer<'a> {
    clip: &'a [u8],
    command: PlayerCommand,
    temp_dir: Option<PathBuf>,
}

impl<'a> AudioPlayer<'a> {
    pub fn new(clip: &'a [u8], command: PlayerCommand) -> Self {
        Self {
            clip,
            command,
            temp_dir: None,
        }
    }

    /// Stage temp files in `dir` instead of the system temp directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Play the clip and wait for the player to exit.
    ///
    /// The temp file is gone when this returns, whatever the outcome.
    ///
    /// # Errors
    /// - `PlayerError::Io` - the temp file could not be created or written
    /// - `PlayerError::Playback` - the player could not start or exited non-zero
    pub fn play_blocking(&self) -> Result<(), PlayerError> {
        let clip = clip::stage(self.clip, self.temp_dir.as_deref())?;
        debug!(path = ?clip, program = %self.command.program, "Playing audio (blocking)");

        let status = self
            .command
            .build(&clip)
            .status()
            .map_err(|e| self.launch_error(e))?;

        if let Err(e) = clip.close() {
            warn!(error = %e, "Failed to remove audio temp file");
        }

        if status.success() {
            Ok(())
        } else {
            Err(PlayerError::playback(
                &self.command.program,
                format!("exited with {}", status),
            ))
        }
    }

    /// Start the player and return without waiting for it.
    ///
    /// Launch failures are returned. Anything after a successful launch is
    /// only logged: a background thread waits for the player and then removes
    /// the temp file.
    pub fn play_detached(&self) -> Result<DetachedPlayback, PlayerError> {
        let clip = clip::stage(self.clip, self.temp_dir.as_deref())?;
        debug!(path = ?clip, program = %self.command.program, "Playing audio (detached)");

        // Reaper first: a launched player must always have an owner.
        let (tx, rx) = mpsc::channel::<(Child, TempPath)>();
        let program = self.command.program.clone();
        let handle = thread::Builder::new()
            .name("audio-reaper".to_string())
            .spawn(move || {
                if let Ok((mut child, clip)) = rx.recv() {
                    match child.wait() {
                        Ok(status) => debug!(%program, %status, "Audio player exited"),
                        Err(e) => debug!(%program, error = %e, "Failed to wait for audio player"),
                    }
                    drop(clip);
                }
            })?;

        let child = self
            .command
            .build(&clip)
            .spawn()
            .map_err(|e| self.launch_error(e))?;

        let path = clip.to_path_buf();
        if let Err(mpsc::SendError((child, clip))) = tx.send((child, clip)) {
            warn!("Audio reaper is gone, stopping player");
            stop(child);
            drop(clip);
        }

        Ok(DetachedPlayback { path, handle })
    }

    fn launch_error(&self, e: std::io::Error) -> PlayerError {
        PlayerError::playback(&self.command.program, format!("failed to start: {}", e))
    }
}

/// Kill a player nobody else will wait for, and reap it.
fn stop(mut child: Child) {
    if let Err(e) = child.kill() {
        debug!(error = %e, "Failed to kill audio player");
    }
    if let Err(e) = child.wait() {
        debug!(error = %e, "Failed to wait for audio player");
    }
}

/// A running fire-and-forget playback.
///
/// Dropping this does not stop the player; the reaper thread keeps running.
#[derive(Debug)]
pub struct DetachedPlayback {
    path: PathBuf,
    handle: JoinHandle<()>,
}

impl DetachedPlayback {
    /// Path of the staged clip (removed once the player exits).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the player has exited and the temp file is removed.
    pub fn wait(self) {
        if self.handle.join().is_err() {
            warn!("Audio reaper thread panicked");
        }
    }
}
