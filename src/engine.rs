//! The decoder engine boundary.
//!
//! All real work (demuxing, decoding, audio/video sync, rendering) happens
//! inside an external MPEG engine. This module defines the surface the
//! wrapper consumes. Embedders supply the implementation, typically a
//! binding to a native decoder library.

use crate::stream::StreamAdapter;
use crate::surface::SharedSurface;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Point-in-time snapshot of the stream an engine is decoding.
///
/// Serializable so binding layers can marshal it to host structures without
/// hand-written glue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Video width in pixels; 0 when the stream carries no video.
    pub width: u32,
    /// Video height in pixels; 0 when the stream carries no video.
    pub height: u32,
    /// Whether a video elementary stream was detected.
    pub has_video: bool,
    /// Whether an audio elementary stream was detected.
    pub has_audio: bool,
    /// Index of the most recently decoded video frame.
    pub current_frame: u64,
    /// Current playback position in seconds.
    pub current_time: f64,
    /// Total stream duration in seconds.
    pub total_time: f64,
}

/// Engine playback status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Not playing. The initial state, and the state after end-of-stream.
    #[default]
    Stopped,
    /// Actively decoding and rendering.
    Playing,
    /// Suspended at the current position.
    Paused,
}

/// Clip rectangle accepted by the engine's display-attach operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One live decoder instance.
///
/// A [`Movie`](crate::Movie) owns exactly one of these and forwards every
/// control and query operation to it. Dropping the trait object destroys
/// the decoder; implementations release their native resources in `Drop`.
///
/// Control operations are infallible by contract: the engine either applies
/// them or ignores them, it never reports per-call failures.
pub trait MpegEngine {
    /// Query the current stream-info snapshot.
    fn info(&self) -> StreamInfo;

    /// Query the playback status.
    fn status(&self) -> PlaybackStatus;

    /// The most recent internal fault, if any.
    ///
    /// Consulted once right after creation; a report here makes
    /// construction fail with the diagnostic surfaced verbatim.
    fn error(&self) -> Option<String>;

    /// Start or resume playback.
    fn play(&mut self);

    /// Halt playback. Whether the position is retained or reset is an
    /// engine property.
    fn stop(&mut self);

    /// Toggle between playing and paused.
    fn pause(&mut self);

    /// Reset the playback position to the start of the stream.
    fn rewind(&mut self);

    /// Advance the playback position by `seconds`.
    fn skip(&mut self, seconds: f64);

    /// Set output volume on the engine's integer 0-100 scale.
    fn set_volume(&mut self, volume: i32);

    /// Enable or disable audio output.
    fn enable_audio(&mut self, enabled: bool);

    /// Enable or disable video output.
    fn enable_video(&mut self, enabled: bool);

    /// Attach a drawable surface to receive decoded frames.
    fn set_display(
        &mut self,
        surface: SharedSurface,
        clip: Option<ClipRect>,
        scale: Option<(u32, u32)>,
    );

    /// Position the video at the given top-left offset within the attached
    /// surface.
    fn move_output(&mut self, x: i32, y: i32);

    /// Scale decoded video output to the given dimensions.
    ///
    /// Separate from [`set_display`](MpegEngine::set_display) because output
    /// is scaled at construction time even when no surface is attached yet.
    fn scale_output(&mut self, width: u32, height: u32);
}

/// Entry points for creating decoder instances.
///
/// Mirrors the engine's C-level contract: creation either yields an
/// instance or nothing. Richer diagnostics are only available from
/// [`MpegEngine::error`] on an instance that was actually created.
pub trait EngineBackend {
    /// Open a movie file directly by path.
    fn open_path(&self, path: &Path) -> Option<Box<dyn MpegEngine>>;

    /// Open a movie from an adapted stream.
    ///
    /// The adapter may be moved into the engine's background execution
    /// context and read from there at arbitrary times.
    fn open_stream(&self, stream: StreamAdapter) -> Option<Box<dyn MpegEngine>>;
}
