//! Construction of movie handles.

use crate::engine::{EngineBackend, MpegEngine};
use crate::error::{MovieError, Result};
use crate::handle::Movie;
use crate::stream::{SharedStream, StreamAdapter};
use crate::surface::SharedSurface;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl Movie {
    /// Open a movie file by path.
    ///
    /// `default_display`, when present, is attached to the engine
    /// immediately so playback can render without an explicit
    /// [`set_display`](Movie::set_display) call. The handle does not retain
    /// that implicit attachment; the reference the engine holds keeps the
    /// surface alive.
    ///
    /// # Errors
    ///
    /// [`MovieError::Creation`] when the engine cannot produce a decoder;
    /// [`MovieError::Decode`] when the decoder is created but immediately
    /// reports an internal fault. The faulted decoder is destroyed before
    /// the error is returned.
    pub fn open(
        backend: &dyn EngineBackend,
        path: impl AsRef<Path>,
        default_display: Option<SharedSurface>,
    ) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening movie from file");
        let engine = backend.open_path(path).ok_or(MovieError::Creation)?;
        Self::finish(engine, None, default_display)
    }

    /// Open a movie from an already-open stream.
    ///
    /// The stream is wrapped in an I/O adapter for the engine, and a
    /// reference is retained for the handle's lifetime: the engine may
    /// keep reading from a background context long after this call
    /// returns. The caller must not access the stream while the handle
    /// lives.
    ///
    /// # Errors
    ///
    /// Same as [`Movie::open`].
    pub fn from_stream(
        backend: &dyn EngineBackend,
        stream: SharedStream,
        default_display: Option<SharedSurface>,
    ) -> Result<Self> {
        debug!("opening movie from stream");
        let adapter = StreamAdapter::new(Arc::clone(&stream));
        let engine = backend.open_stream(adapter).ok_or(MovieError::Creation)?;
        Self::finish(engine, Some(stream), default_display)
    }

    fn finish(
        mut engine: Box<dyn MpegEngine>,
        source_stream: Option<SharedStream>,
        default_display: Option<SharedSurface>,
    ) -> Result<Self> {
        if let Some(message) = engine.error() {
            // Destroy the half-constructed decoder before surfacing the fault.
            drop(engine);
            warn!(error = %message, "decoder created but faulted");
            return Err(MovieError::Decode(message));
        }

        let stream_info = engine.info();

        // Audio output stays off; this crate wires up video playback only.
        engine.enable_audio(false);

        if let Some(surface) = default_display {
            engine.set_display(surface, None, None);
        }
        engine.scale_output(stream_info.width, stream_info.height);

        info!(
            width = stream_info.width,
            height = stream_info.height,
            has_video = stream_info.has_video,
            has_audio = stream_info.has_audio,
            "opened movie"
        );

        Ok(Self {
            engine,
            display_target: None,
            source_stream,
        })
    }
}
