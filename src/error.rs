//! Error types for construction and display-target marshalling.

use thiserror::Error;

/// Errors surfaced by [`Movie`](crate::Movie) operations.
///
/// Every error is terminal to the triggering call only; an already valid
/// handle stays usable for unrelated operations.
#[derive(Debug, Error)]
pub enum MovieError {
    /// The engine returned no decoder instance at all (malformed file,
    /// unsupported format, or an I/O failure at open time).
    #[error("cannot create movie decoder")]
    Creation,

    /// The engine produced a decoder that immediately reported an internal
    /// fault. The message is the engine's diagnostic string, verbatim.
    #[error("{0}")]
    Decode(String),

    /// The display target was neither a drawable surface nor the explicit
    /// no-video sentinel. Carries the host-side type name.
    #[error("destination must be a drawable surface, not {0}")]
    BadDisplayTarget(String),
}

/// Convenience result alias for movie operations.
pub type Result<T> = std::result::Result<T, MovieError>;
