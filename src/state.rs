//! Stream-info and status queries.
//!
//! Every query reads a fresh engine snapshot; nothing is cached in the
//! handle.

use crate::engine::{PlaybackStatus, StreamInfo};
use crate::handle::Movie;

impl Movie {
    /// The current stream-info snapshot.
    pub fn info(&self) -> StreamInfo {
        self.engine.info()
    }

    /// Whether a video elementary stream was detected.
    pub fn has_video(&self) -> bool {
        self.engine.info().has_video
    }

    /// Whether an audio elementary stream was detected.
    pub fn has_audio(&self) -> bool {
        self.engine.info().has_audio
    }

    /// Video dimensions in pixels; `(0, 0)` or the engine's default when
    /// the stream carries no video.
    pub fn size(&self) -> (u32, u32) {
        let stream_info = self.engine.info();
        (stream_info.width, stream_info.height)
    }

    /// Index of the current video frame.
    pub fn frame(&self) -> u64 {
        self.engine.info().current_frame
    }

    /// Current playback position in seconds.
    ///
    /// Known limitation: some engines never advance this field and always
    /// report 0.
    pub fn time(&self) -> f64 {
        self.engine.info().current_time
    }

    /// Total stream duration in seconds.
    pub fn length(&self) -> f64 {
        self.engine.info().total_time
    }

    /// `true` iff the engine is currently playing; `false` for both
    /// paused and stopped.
    pub fn is_busy(&self) -> bool {
        self.engine.status() == PlaybackStatus::Playing
    }
}
