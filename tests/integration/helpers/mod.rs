//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

use badapple::FRAME_SEPARATOR;

/// Gzip `frames` joined by the frame separator.
pub fn gzip_frames(frames: &[&str]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(frames.join(FRAME_SEPARATOR).as_bytes())
        .expect("Failed to compress frames");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Write a gzip frame file into `dir` and return its path.
pub fn write_frames_file(dir: &Path, frames: &[&str]) -> PathBuf {
    let path = dir.join("frames.txt.gz");
    fs::write(&path, gzip_frames(frames)).expect("Failed to write frames file");
    path
}

/// Owned frame list for the library API.
pub fn frames(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// A `badapple` invocation isolated from the user's config.
pub fn badapple(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_badapple"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

/// Files in `dir` whose name marks them as staged audio clips.
pub fn staged_clips(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("Failed to read temp dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .map(|n| n.to_string_lossy().starts_with("bad-apple-"))
                .unwrap_or(false)
        })
        .collect()
}
