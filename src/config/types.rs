//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub frames: FramesConfig,
}

/// Playback defaults, overridden by command-line flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Number of passes when not repeating
    #[serde(default = "default_times")]
    pub times: i64,
    /// Loop until interrupted
    #[serde(default)]
    pub repeat: bool,
    /// Play audio along with the video
    #[serde(default)]
    pub audio: bool,
}

pub fn default_fps() -> f64 {
    30.0
}

pub fn default_times() -> i64 {
    1
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            times: default_times(),
            repeat: false,
            audio: false,
        }
    }
}

/// External audio player configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Player command; the platform default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    /// Arguments placed before the clip path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// WAV file to play instead of the embedded clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Frame source configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FramesConfig {
    /// Gzip frame file to play instead of the embedded frames
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
