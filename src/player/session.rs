//! Whole-run entry points for the two playback modes.

use std::io::{self, Write};

use tracing::debug;

use super::playback::Playback;
use super::screen::Screen;
use crate::audio::AudioPlayer;
use crate::error::PlayerError;
use crate::options::PlaybackOptions;

/// Play `frames` on `out`, starting the clip with each pass when
/// `options.audio` is set.
///
/// The cursor is hidden for the duration and shown again on return.
pub fn play_video<W: Write>(
    out: W,
    frames: &[String],
    clip: &[u8],
    options: &PlaybackOptions,
) -> Result<(), VideoError> {
    let mut playback = Playback::new(frames, options.fps)?;
    if options.audio {
        playback = playback.with_audio(AudioPlayer::new(clip, options.player.clone()));
    }

    let mut screen = Screen::new(out)?;
    playback.run(&mut screen, options.repeat)?;
    Ok(())
}

/// Play only the clip, blocking, once per pass.
///
/// The first failed pass ends the run and is returned.
pub fn play_audio_only(clip: &[u8], options: &PlaybackOptions) -> Result<(), PlayerError> {
    let player = AudioPlayer::new(clip, options.player.clone());
    options.repeat.run(|pass| {
        debug!(pass, "Audio-only pass");
        player.play_blocking()
    })
}

/// Failure of a video run.
#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("failed to write to terminal: {0}")]
    Terminal(#[from] io::Error),
}
