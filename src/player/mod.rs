//! Terminal frame player
//!
//! - `screen`: escape sequences and the cursor-hiding [`Screen`] guard
//! - `ticker`: fixed-rate ticker and fps validation
//! - `playback`: the pass loop and [`RepeatPolicy`]
//! - `session`: video and audio-only runs built from [`crate::PlaybackOptions`]
//!
//! # Usage
//!
//! ```no_run
//! use badapple::player::{Playback, RepeatPolicy, Screen};
//!
//! let frames = vec!["frame one".to_string(), "frame two".to_string()];
//! let playback = Playback::new(&frames, 30.0).unwrap();
//! let mut screen = Screen::new(std::io::stdout()).unwrap();
//! playback.run(&mut screen, RepeatPolicy::Times(2)).unwrap();
//! ```

pub mod playback;
pub mod screen;
pub mod session;
pub mod ticker;

pub use playback::{Playback, RepeatPolicy};
pub use screen::{restore_terminal, Screen};
pub use session::{play_audio_only, play_video, VideoError};
pub use ticker::{frame_interval, Ticker};
