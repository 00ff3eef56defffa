//! The drawable-surface boundary.

use std::sync::Arc;

/// A drawable surface the engine renders decoded video frames into.
///
/// The wrapper never draws; it only hands surfaces to the engine and keeps
/// them alive while attached. Embedders implement this for their
/// framebuffer or windowing primitive.
pub trait DrawSurface: Send + Sync {
    /// Surface dimensions in pixels.
    fn size(&self) -> (u32, u32);
}

/// Shared handle to a drawable surface.
pub type SharedSurface = Arc<dyn DrawSurface>;
