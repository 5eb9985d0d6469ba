//! Domain error types.
//!
//! These errors represent validation failures when building the rail
//! network. They are distinct from file loading and search errors.

use super::TrackIndex;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Track id is not of the form `<yard>-<part>`
    #[error("invalid track id: {0:?}")]
    InvalidTrackId(String),

    /// Track length must be positive and finite
    #[error("invalid length {length} for track {track}")]
    InvalidLength { track: String, length: f64 },

    /// A connection refers to a track that was never added
    #[error("unknown track index {0}")]
    UnknownTrackIndex(TrackIndex),
}
