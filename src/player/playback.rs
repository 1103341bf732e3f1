//! Frame playback loop and repeat policy.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, warn};

use super::screen::Screen;
use super::ticker::{frame_interval, Ticker};
use crate::audio::AudioPlayer;
use crate::error::PlayerError;

/// How many passes to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Loop until the process is interrupted.
    Forever,
    /// Play this many passes (always at least one).
    Times(u64),
}

impl RepeatPolicy {
    /// `repeat` wins over `times`; `times` below 1 collapses to one pass.
    pub fn from_flags(repeat: bool, times: i64) -> Self {
        if repeat {
            RepeatPolicy::Forever
        } else {
            RepeatPolicy::Times(times.max(1) as u64)
        }
    }

    /// Number of passes, or `None` for [`RepeatPolicy::Forever`].
    pub fn passes(&self) -> Option<u64> {
        match self {
            RepeatPolicy::Forever => None,
            RepeatPolicy::Times(n) => Some((*n).max(1)),
        }
    }

    /// Call `pass` once per pass, stopping at the first error.
    pub fn run<E, F>(&self, mut pass: F) -> Result<(), E>
    where
        F: FnMut(u64) -> Result<(), E>,
    {
        match self.passes() {
            None => {
                let mut n = 0u64;
                loop {
                    pass(n)?;
                    n = n.wrapping_add(1);
                }
            }
            Some(total) => {
                for n in 0..total {
                    pass(n)?;
                }
                Ok(())
            }
        }
    }
}

/// Renders a frame sequence at a fixed rate, optionally starting audio with
/// every pass.
pub struct Playback<'a> {
    frames: &'a [String],
    interval: Duration,
    audio: Option<AudioPlayer<'a>>,
}

impl<'a> Playback<'a> {
    /// # Errors
    /// `PlayerError::InvalidFps` if `fps` does not give a usable interval.
    pub fn new(frames: &'a [String], fps: f64) -> Result<Self, PlayerError> {
        Ok(Self {
            frames,
            interval: frame_interval(fps)?,
            audio: None,
        })
    }

    /// Start `player` (fire-and-forget) at the beginning of every pass.
    pub fn with_audio(mut self, player: AudioPlayer<'a>) -> Self {
        self.audio = Some(player);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Play the sequence once.
    ///
    /// The first frame is drawn immediately, frame `n` at `n * interval`.
    /// An audio launch failure is reported and playback continues.
    pub fn play_pass<W: Write>(&self, screen: &mut Screen<W>) -> io::Result<()> {
        if let Some(audio) = &self.audio {
            if let Err(e) = audio.play_detached() {
                warn!(error = %e, "Audio launch failed");
                eprintln!("failed to play audio: {}", e);
            }
        }

        let mut ticker = Ticker::new(self.interval);
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                ticker.wait();
            }
            screen.draw(frame)?;
        }
        Ok(())
    }

    /// Play passes according to `policy`. Only a write error ends a
    /// [`RepeatPolicy::Forever`] run.
    pub fn run<W: Write>(&self, screen: &mut Screen<W>, policy: RepeatPolicy) -> io::Result<()> {
        debug!(
            frames = self.frames.len(),
            interval = ?self.interval,
            ?policy,
            "Starting playback"
        );
        policy.run(|pass| {
            debug!(pass, "Playback pass");
            self.play_pass(screen)
        })
    }
}
