//! badapple library
//!
//! Plays an embedded sequence of ASCII-art frames in the terminal, optionally
//! with an embedded audio clip handed to an external system player.

pub mod assets;
pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod frames;
pub mod options;
pub mod player;
pub mod utils;

pub use audio::{AudioPlayer, DetachedPlayback, PlayerCommand};
pub use config::Config;
pub use error::PlayerError;
pub use frames::{load_frames, FRAME_SEPARATOR};
pub use options::PlaybackOptions;
pub use player::{Playback, RepeatPolicy, Screen};
