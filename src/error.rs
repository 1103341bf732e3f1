//! Playback errors.

use std::io;

/// Errors that can occur while loading frames or playing audio.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("failed to decompress frames: {0}")]
    Decompression(String),

    #[error("failed to read frames: {0}")]
    Read(#[source] io::Error),

    #[error("audio temp file: {0}")]
    Io(#[from] io::Error),

    #[error("audio player `{command}` {reason}")]
    Playback { command: String, reason: String },

    #[error("invalid frame rate {0}: must be a finite number greater than 0")]
    InvalidFps(f64),
}

impl PlayerError {
    /// Build a playback error for the given player command.
    pub fn playback(command: &str, reason: impl Into<String>) -> Self {
        PlayerError::Playback {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}
