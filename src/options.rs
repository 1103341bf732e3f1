//! Resolved options for one run.

use std::path::PathBuf;

use tracing::debug;

use crate::audio::PlayerCommand;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::PlayerError;
use crate::player::{frame_interval, RepeatPolicy};

/// Everything a run needs, after merging flags over the config file.
///
/// Precedence is flag, then config, then built-in default. Boolean flags can
/// only switch a feature on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackOptions {
    pub audio: bool,
    pub audio_only: bool,
    pub repeat: RepeatPolicy,
    pub fps: f64,
    pub player: PlayerCommand,
    pub frames_file: Option<PathBuf>,
    pub audio_file: Option<PathBuf>,
}

impl PlaybackOptions {
    /// # Errors
    /// `PlayerError::InvalidFps` when the effective frame rate is unusable.
    /// Validated even for `--audio-only` so a bad config is never silent.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, PlayerError> {
        let fps = cli.fps.unwrap_or(config.playback.fps);
        frame_interval(fps)?;

        let times = cli.times.unwrap_or(config.playback.times);
        let repeat = cli.repeat || config.playback.repeat;

        let mut player = config.player_command();
        if let Some(program) = &cli.player {
            player = PlayerCommand::new(program.as_str())
                .with_args(config.audio.args.clone().unwrap_or_default());
        }

        let options = Self {
            audio: cli.audio || config.playback.audio,
            audio_only: cli.audio_only,
            repeat: RepeatPolicy::from_flags(repeat, times),
            fps,
            player,
            frames_file: cli.frames.clone().or_else(|| config.frames_file()),
            audio_file: cli.audio_file.clone().or_else(|| config.audio_file()),
        };
        debug!(?options, "Resolved playback options");
        Ok(options)
    }
}
