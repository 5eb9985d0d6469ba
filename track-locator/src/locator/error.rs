//! Locator error types.

use crate::domain::TrackIndex;

/// A predicate could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredicateError {
    /// A named track's yard has no station to measure from
    #[error("no station known for yard {0}")]
    UnknownStation(String),
}

/// Error from a locate call.
///
/// These are all caller-contract violations; finding nothing is reported
/// through [`LocateOutcome`](super::LocateOutcome), not as an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    /// Start track is not in the graph
    #[error("start track {0} is not in the network")]
    UnknownTrack(TrackIndex),

    /// Start position lies outside the start track
    #[error("start position {position} is outside track of length {length}")]
    InvalidStartPosition { position: f64, length: f64 },

    /// Search radius is not positive and finite
    #[error("maximum distance must be positive and finite, got {0}")]
    InvalidMaxDistance(f64),

    /// The predicate failed
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}
