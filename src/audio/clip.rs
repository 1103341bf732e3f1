//! Temporary on-disk copies of the audio clip.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, TempPath};

use crate::error::PlayerError;

const CLIP_PREFIX: &str = "bad-apple-";
const CLIP_SUFFIX: &str = ".wav";

/// Write `clip` to a uniquely named, closed temp file.
///
/// The file is removed when the returned `TempPath` is dropped.
pub fn stage(clip: &[u8], dir: Option<&Path>) -> Result<TempPath, PlayerError> {
    let mut builder = Builder::new();
    builder.prefix(CLIP_PREFIX).suffix(CLIP_SUFFIX);

    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(clip)?;
    file.flush()?;

    Ok(file.into_temp_path())
}
