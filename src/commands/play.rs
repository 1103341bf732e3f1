//! Play command handler

use anyhow::{Context, Result};
use std::io;

use badapple::assets;
use badapple::player::{play_audio_only, play_video};
use badapple::{load_frames, PlaybackOptions};

/// Run one playback according to `options`.
///
/// Audio-only mode never reads the frame blob. In video mode a frame-load
/// failure is fatal before the terminal is touched.
#[cfg(not(tarpaulin_include))]
pub fn handle(options: &PlaybackOptions) -> Result<()> {
    let clip = assets::audio(options.audio_file.as_deref())?;

    if options.audio_only {
        return play_audio_only(&clip, options).context("failed to play audio");
    }

    let blob = assets::frames(options.frames_file.as_deref())?;
    let frames = load_frames(&blob).context("failed to load frames")?;
    play_video(io::stdout(), &frames, &clip, options).context("playback failed")
}
