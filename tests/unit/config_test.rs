//! Unit tests for config module

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use badapple::config::expand_home;
use badapple::{Config, PlayerCommand};

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.playback.fps, 30.0);
    assert_eq!(config.playback.times, 1);
    assert!(!config.playback.repeat);
    assert!(!config.playback.audio);
    assert!(config.audio.player.is_none());
    assert!(config.audio.args.is_none());
    assert!(config.audio.file.is_none());
    assert!(config.frames.file.is_none());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.playback.fps = 24.0;
    config.audio.player = Some("paplay".to_string());
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn full_config_parses_from_toml() {
    let toml_str = r#"
[playback]
fps = 12.5
times = 3
repeat = true
audio = true

[audio]
player = "mpv"
args = ["--no-video", "--really-quiet"]
file = "/music/clip.wav"

[frames]
file = "/art/frames.txt.gz"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.playback.fps, 12.5);
    assert_eq!(config.playback.times, 3);
    assert!(config.playback.repeat);
    assert!(config.playback.audio);
    assert_eq!(config.audio.player.as_deref(), Some("mpv"));
    assert_eq!(config.audio_file(), Some(PathBuf::from("/music/clip.wav")));
    assert_eq!(config.frames_file(), Some(PathBuf::from("/art/frames.txt.gz")));
}

#[test]
fn missing_sections_use_defaults() {
    let toml_str = r#"
[audio]
player = "paplay"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.playback, Config::default().playback);
    assert_eq!(config.frames, Config::default().frames);
}

#[test]
fn partial_playback_section_keeps_other_defaults() {
    let config: Config = toml::from_str("[playback]\nrepeat = true\n").unwrap();
    assert!(config.playback.repeat);
    assert_eq!(config.playback.fps, 30.0);
    assert_eq!(config.playback.times, 1);
}

#[test]
fn player_command_defaults_to_platform_player() {
    assert_eq!(Config::default().player_command(), PlayerCommand::default());
}

#[test]
fn player_command_uses_configured_program_without_args() {
    let config: Config = toml::from_str("[audio]\nplayer = \"paplay\"\n").unwrap();
    let command = config.player_command();
    assert_eq!(command.program, "paplay");
    assert!(command.args.is_empty());
}

#[test]
fn args_replace_default_player_args() {
    let config: Config = toml::from_str("[audio]\nargs = [\"-N\"]\n").unwrap();
    let command = config.player_command();
    assert_eq!(command.program, PlayerCommand::default().program);
    assert_eq!(command.args, vec!["-N".to_string()]);
}

#[test]
fn load_from_reads_an_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[playback]\nfps = 60\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.playback.fps, 60.0);
}

#[test]
fn load_from_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn load_from_invalid_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[playback\nfps = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn wrong_value_type_is_an_error() {
    assert!(toml::from_str::<Config>("[playback]\nfps = \"fast\"\n").is_err());
}

#[test]
fn config_path_ends_with_badapple_config() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/badapple/config.toml"));
}

#[test]
fn expand_home_leaves_other_paths_alone() {
    assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
    assert_eq!(expand_home("relative/~/x"), PathBuf::from("relative/~/x"));
}

#[test]
fn expand_home_replaces_leading_tilde() {
    let expanded = expand_home("~/frames.gz");
    if let Some(home) = dirs::home_dir() {
        assert_eq!(expanded, home.join("frames.gz"));
    }
}
