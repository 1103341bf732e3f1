//! Configuration management for badapple

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::audio::PlayerCommand;

impl Config {
    /// Get the config file path (~/.config/badapple/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Player command from `[audio]`, falling back to the platform default.
    ///
    /// `args` replaces the default arguments even when `player` is unset.
    pub fn player_command(&self) -> PlayerCommand {
        let mut command = match &self.audio.player {
            Some(program) => PlayerCommand::new(program.as_str()),
            None => PlayerCommand::default(),
        };
        if let Some(args) = &self.audio.args {
            command.args = args.clone();
        }
        command
    }

    /// Frame file override with `~` expanded
    pub fn frames_file(&self) -> Option<PathBuf> {
        self.frames.file.as_deref().map(expand_home)
    }

    /// Audio file override with `~` expanded
    pub fn audio_file(&self) -> Option<PathBuf> {
        self.audio.file.as_deref().map(expand_home)
    }
}
