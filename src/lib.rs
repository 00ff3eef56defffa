//! Movie playback handles over an external MPEG decoding engine.
//!
//! This crate exposes movie playback controls to an embedding host by
//! forwarding every call to an external decoder. No demuxing, decoding,
//! audio/video sync, or rendering happens here; the engine does all of
//! it. What the crate does own is the lifecycle of the decoder instance
//! and the marshalling between host values and engine structures.
//!
//! The external collaborators are trait seams supplied by the embedder:
//!
//! - [`EngineBackend`] / [`MpegEngine`]: the decoder library
//! - [`DrawSurface`]: the drawable surface video is rendered into
//! - [`MovieStream`]: an already-open input stream
//!
//! Audio output is disabled at construction and the crate exposes no way
//! to re-enable it; only video playback is wired up.
//!
//! # Thread Safety
//!
//! A [`Movie`] adds no locking of its own and should stay on the thread
//! that created it unless the engine implementation guarantees otherwise.
//! The engine may read a source stream from its own background context at
//! arbitrary times, so a stream handed to [`Movie::from_stream`] must not
//! be touched by the caller while the handle lives; the retained reference
//! prevents premature destruction, nothing more.
//!
//! # Resource Management
//!
//! Handles are RAII: dropping a [`Movie`] destroys the decoder exactly
//! once and releases the display-target and source-stream references.
//! Construction errors destroy any partially created decoder before they
//! surface.

mod control;
mod display;
mod engine;
mod error;
mod handle;
mod lifecycle;
mod state;
mod stream;
mod surface;

pub use display::DisplayTarget;
pub use engine::{ClipRect, EngineBackend, MpegEngine, PlaybackStatus, StreamInfo};
pub use error::{MovieError, Result};
pub use handle::Movie;
pub use stream::{MovieStream, SharedStream, StreamAdapter};
pub use surface::{DrawSurface, SharedSurface};

/// Library version string, for embedding hosts that report it.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
