//! Nearest-track search over the rail network.
//!
//! This module implements the bounded best-first search that answers:
//! "I'm at this position on this track - what is the nearest track I'd
//! accept as a destination?"
//!
//! The search itself is predicate-driven; [`TrackPredicate`] filters
//! express what counts as acceptable, and [`NamedTrackSearch`] combines
//! them into the standard "nearest named yard track" query.

mod config;
mod error;
mod named;
mod predicate;
mod search;


pub use config::{
    DEFAULT_MAX_DISTANCE, DEFAULT_SECONDARY_YARD_DISTANCE, DEFAULT_STATION_PROXIMITY_CEILING,
    LocatorConfig, NamedTrackSearchConfig,
};
pub use error::{LocateError, PredicateError};
pub use named::{NamedTrackResult, NamedTrackSearch, SearchPass};
pub use predicate::{
    And, DeprioritizedYardFilter, NamedTrackFilter, StationProximityFilter, SuffixMarker,
    TrackPredicate, TrackPredicateExt, YardClassifier,
};
pub use search::{LocateOutcome, StopReason, TrackLocator, TrackMatch};
