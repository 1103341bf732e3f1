//! Frame loading.
//!
//! The frame blob is a gzip stream of plain text. Frames are separated by
//! [`FRAME_SEPARATOR`] and are kept byte-for-byte, including leading and
//! trailing whitespace.

use std::io::{self, Read};

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::PlayerError;

/// Literal token placed between two frames.
pub const FRAME_SEPARATOR: &str = "\n---FRAME---\n";

/// Decompress `compressed` and split it into frames.
///
/// `k` separators produce `k + 1` frames, so an empty text produces a single
/// empty frame. Corrupt input never yields a partial list.
pub fn load_frames(compressed: &[u8]) -> Result<Vec<String>, PlayerError> {
    let text = decompress(compressed)?;
    let frames = split_frames(&text);
    debug!(
        frames = frames.len(),
        bytes = text.len(),
        "Loaded frame sequence"
    );
    Ok(frames)
}

/// Split already-decompressed text on [`FRAME_SEPARATOR`].
pub fn split_frames(text: &str) -> Vec<String> {
    text.split(FRAME_SEPARATOR).map(str::to_string).collect()
}

fn decompress(compressed: &[u8]) -> Result<String, PlayerError> {
    if compressed.is_empty() {
        return Err(PlayerError::Decompression("input is empty".to_string()));
    }

    let mut decoder = GzDecoder::new(compressed);
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
            PlayerError::Decompression(e.to_string())
        }
        _ => PlayerError::Read(e),
    })?;

    Ok(match String::from_utf8(buf) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
