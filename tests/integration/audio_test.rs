//! Integration tests for the external audio player
//!
//! `sh` stands in for the real player. The clip path arrives as `$1`, and
//! `$0` names a file the script writes the clip path into.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::TempDir;

use badapple::{AudioPlayer, PlayerCommand, PlayerError};

use crate::helpers::staged_clips;

/// `sh -c <script> <record>`; the clip path is appended by the player.
fn sh(script: &str, record: &Path) -> PlayerCommand {
    PlayerCommand::new("sh").with_args([
        "-c".to_string(),
        script.to_string(),
        record.to_string_lossy().to_string(),
    ])
}

fn recorded_clip(record: &Path) -> PathBuf {
    PathBuf::from(fs::read_to_string(record).expect("player did not record the clip path"))
}

// ============================================================================
// Blocking playback
// ============================================================================

#[test]
fn blocking_plays_the_staged_clip_and_removes_it() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("record");
    let command = sh(r#"test -f "$1" && cat "$1" > "$0.clip" && printf '%s' "$1" > "$0""#, &record);

    AudioPlayer::new(b"RIFF-clip", command)
        .in_dir(temp.path())
        .play_blocking()
        .unwrap();

    assert_eq!(fs::read(temp.path().join("record.clip")).unwrap(), b"RIFF-clip");
    assert!(!recorded_clip(&record).exists());
    assert!(staged_clips(temp.path()).is_empty());
}

#[test]
fn blocking_failure_still_removes_the_clip() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("record");
    let command = sh(r#"printf '%s' "$1" > "$0"; exit 3"#, &record);

    let err = AudioPlayer::new(b"clip", command)
        .in_dir(temp.path())
        .play_blocking()
        .unwrap_err();

    assert!(matches!(err, PlayerError::Playback { .. }));
    assert!(err.to_string().contains("exited"));
    assert!(!recorded_clip(&record).exists());
    assert!(staged_clips(temp.path()).is_empty());
}

#[test]
fn blocking_with_true_succeeds() {
    let temp = TempDir::new().unwrap();
    AudioPlayer::new(b"clip", PlayerCommand::new("true"))
        .in_dir(temp.path())
        .play_blocking()
        .unwrap();
    assert!(staged_clips(temp.path()).is_empty());
}

#[test]
fn blocking_with_false_is_a_playback_error() {
    let temp = TempDir::new().unwrap();
    let result = AudioPlayer::new(b"clip", PlayerCommand::new("false"))
        .in_dir(temp.path())
        .play_blocking();
    assert!(matches!(result, Err(PlayerError::Playback { .. })));
    assert!(staged_clips(temp.path()).is_empty());
}

#[test]
fn unwritable_temp_dir_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    let result = AudioPlayer::new(b"clip", PlayerCommand::new("true"))
        .in_dir(temp.path().join("missing"))
        .play_blocking();
    assert!(matches!(result, Err(PlayerError::Io(_))));
}

// ============================================================================
// Detached playback
// ============================================================================

#[test]
fn detached_returns_before_the_player_exits() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("record");
    let command = sh(r#"sleep 0.5; printf '%s' "$1" > "$0""#, &record);

    let start = Instant::now();
    let playback = AudioPlayer::new(b"clip", command)
        .in_dir(temp.path())
        .play_detached()
        .unwrap();
    assert!(start.elapsed() < Duration::from_millis(400));

    let clip = playback.path().to_path_buf();
    assert!(clip.exists());
    assert!(!playback.is_finished());

    playback.wait();
    assert!(!clip.exists());
    assert_eq!(recorded_clip(&record), clip);
    assert!(staged_clips(temp.path()).is_empty());
}

#[test]
fn detached_failure_after_launch_is_not_reported() {
    let temp = TempDir::new().unwrap();
    let playback = AudioPlayer::new(b"clip", PlayerCommand::new("false"))
        .in_dir(temp.path())
        .play_detached()
        .unwrap();

    let clip = playback.path().to_path_buf();
    playback.wait();
    assert!(!clip.exists());
}

#[test]
fn dropped_handle_still_cleans_up() {
    let temp = TempDir::new().unwrap();
    let playback = AudioPlayer::new(b"clip", PlayerCommand::new("true"))
        .in_dir(temp.path())
        .play_detached()
        .unwrap();
    let clip = playback.path().to_path_buf();
    drop(playback);

    let deadline = Instant::now() + Duration::from_secs(5);
    while clip.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!clip.exists());
}
