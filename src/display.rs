//! Display-target marshalling.

use crate::error::{MovieError, Result};
use crate::handle::Movie;
use crate::surface::SharedSurface;
use std::sync::Arc;
use tracing::debug;

/// A display destination as received from the host environment.
///
/// The host boundary is dynamically typed: a binding layer classifies
/// whatever value the script passed and hands the result here.
pub enum DisplayTarget {
    /// Render video into this surface.
    Surface(SharedSurface),
    /// The explicit "no target" sentinel; disables video output.
    None,
    /// Anything else. Carries the host-side type name for the error
    /// message; rejected by [`Movie::set_display`].
    Unsupported(String),
}

impl Movie {
    /// Change the video output surface.
    ///
    /// A surface target replaces the previously held reference, enables
    /// video output, attaches the surface with no clipping or scaling
    /// override, and positions the video at `position`, a top-left
    /// offset; `(0, 0)` is the origin.
    ///
    /// [`DisplayTarget::None`] releases the held reference and disables
    /// video output.
    ///
    /// # Errors
    ///
    /// [`MovieError::BadDisplayTarget`] for an unsupported target. Video
    /// output is disabled even on this rejected path; the stream itself is
    /// untouched, so queries such as [`size`](Movie::size) still report
    /// the decoder's native values.
    pub fn set_display(&mut self, target: DisplayTarget, position: (i32, i32)) -> Result<()> {
        // The old reference is released on every path, accepted or not.
        self.display_target = None;

        match target {
            DisplayTarget::Surface(surface) => {
                let (x, y) = position;
                debug!(x, y, "attaching display surface");
                self.display_target = Some(Arc::clone(&surface));
                self.engine.enable_video(true);
                self.engine.set_display(surface, None, None);
                self.engine.move_output(x, y);
                Ok(())
            }
            DisplayTarget::None => {
                self.engine.enable_video(false);
                Ok(())
            }
            DisplayTarget::Unsupported(type_name) => {
                self.engine.enable_video(false);
                Err(MovieError::BadDisplayTarget(type_name))
            }
        }
    }
}
