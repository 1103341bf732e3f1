//! Fixed-rate ticker.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::PlayerError;

/// Longest accepted frame interval (fps below 1/3600 is rejected).
pub const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Convert a frame rate into the time between two frames.
///
/// # Errors
/// `PlayerError::InvalidFps` unless `fps` is finite, positive, and yields an
/// interval between one nanosecond and [`MAX_INTERVAL`].
pub fn frame_interval(fps: f64) -> Result<Duration, PlayerError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(PlayerError::InvalidFps(fps));
    }
    match Duration::try_from_secs_f64(1.0 / fps) {
        Ok(interval) if !interval.is_zero() && interval <= MAX_INTERVAL => Ok(interval),
        _ => Err(PlayerError::InvalidFps(fps)),
    }
}

/// Ticks at `start + n * interval`.
///
/// Ticks missed while the caller was busy are dropped, so a slow frame
/// delays at most the next tick instead of causing a burst.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// Start a ticker whose first tick is one interval from now.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    /// Sleep until the next tick.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }

        let now = Instant::now();
        self.next += self.interval;
        if self.next <= now {
            let step = self.interval.as_nanos();
            let missed = (now - self.next).as_nanos() / step + 1;
            let skip = u64::try_from(missed * step).unwrap_or(u64::MAX);
            self.next += Duration::from_nanos(skip);
        }
    }
}
