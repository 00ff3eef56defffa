//! Playback control operations.
//!
//! Thin forwards into the engine. The wrapper redefines nothing about
//! playback semantics: pause is the engine's two-state toggle, stop's
//! position handling is an engine property, and negative skips pass
//! through untouched.

use crate::handle::Movie;
use tracing::trace;

impl Movie {
    /// Start or resume playback: audio if enabled, video if a display
    /// target is attached.
    pub fn play(&mut self) {
        self.engine.play();
    }

    /// Halt playback.
    pub fn stop(&mut self) {
        self.engine.stop();
    }

    /// Toggle between playing and paused.
    ///
    /// Calling twice returns to the original state; this is a toggle, not
    /// an idempotent pause.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Reset the playback position to the start of the stream.
    pub fn rewind(&mut self) {
        self.engine.rewind();
    }

    /// Advance the playback position by `seconds`; fractional values are
    /// allowed.
    ///
    /// Negative values are not validated here; the engine's behavior is
    /// authoritative for them.
    pub fn skip(&mut self, seconds: f64) {
        trace!(seconds, "skip");
        self.engine.skip(seconds);
    }

    /// Set playback volume. `level` is on the 0.0-1.0 scale; values
    /// outside that range are clamped after scaling, not rejected.
    ///
    /// The engine works on an integer 0-100 scale. `level * 100` is
    /// rounded to the nearest integer, ties away from zero, then clamped.
    pub fn set_volume(&mut self, level: f64) {
        self.engine.set_volume(scale_volume(level));
    }
}

/// Map a 0.0-1.0 volume level to the engine's 0-100 scale.
fn scale_volume(level: f64) -> i32 {
    ((level * 100.0).round() as i32).clamp(0, 100)
}
