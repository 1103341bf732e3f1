//! Assets compiled into the binary.
//!
//! `FRAMES_GZ` is a gzip stream of text frames joined by
//! [`crate::frames::FRAME_SEPARATOR`]. `AUDIO_WAV` is a WAV clip that is
//! never decoded here, only handed to the external player. Either can be
//! replaced by a file at run time.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Gzip-compressed frame text.
pub const FRAMES_GZ: &[u8] = include_bytes!("../assets/frames.txt.gz");

/// Waveform audio clip.
pub const AUDIO_WAV: &[u8] = include_bytes!("../assets/bad_apple.wav");

/// Frame blob for one run: the embedded one unless `path` overrides it.
pub fn frames(path: Option<&Path>) -> Result<Cow<'static, [u8]>> {
    load(path, FRAMES_GZ, "frames")
}

/// Audio clip for one run: the embedded one unless `path` overrides it.
pub fn audio(path: Option<&Path>) -> Result<Cow<'static, [u8]>> {
    load(path, AUDIO_WAV, "audio")
}

fn load(path: Option<&Path>, embedded: &'static [u8], kind: &str) -> Result<Cow<'static, [u8]>> {
    match path {
        Some(path) => fs::read(path)
            .map(Cow::Owned)
            .with_context(|| format!("Failed to read {} file: {:?}", kind, path)),
        None => Ok(Cow::Borrowed(embedded)),
    }
}
