//! The movie handle.

use crate::engine::MpegEngine;
use crate::stream::SharedStream;
use crate::surface::SharedSurface;

/// Playback handle owning one decoder instance.
///
/// Construction probes the engine for stream info; control operations
/// forward to the engine; query operations read fresh engine snapshots.
/// See the crate root for the thread-safety contract.
///
/// Dropping the handle destroys the decoder and releases the
/// display-target and source-stream references. Field order is
/// load-bearing: the engine goes down before either reference is released,
/// so it can never observe a dangling stream or surface.
pub struct Movie {
    pub(crate) engine: Box<dyn MpegEngine>,
    pub(crate) display_target: Option<SharedSurface>,
    pub(crate) source_stream: Option<SharedStream>,
}

impl std::fmt::Debug for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Movie")
            .field("display_target", &self.display_target.is_some())
            .field("source_stream", &self.source_stream.is_some())
            .finish_non_exhaustive()
    }
}
