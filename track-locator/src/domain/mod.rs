//! Domain types for the track locator.
//!
//! This module contains the value types that describe the rail network:
//! track identities, tracks, the directional sides used for traversal, and
//! stations. All types enforce their invariants at construction time, so
//! code that receives them can trust their validity.

mod error;
mod station;
mod track;

pub use error::DomainError;
pub use station::{Station, WorldPoint};
pub use track::{Track, TrackEnd, TrackId, TrackIndex, TrackSide};
