//! Match predicates: "is this track an acceptable destination at this
//! path distance?"
//!
//! Predicates are pure functions of `(track, distance)`. The filters here
//! cover the named-track search; any `Fn(&Track, f64) -> bool` closure is a
//! predicate too, and predicates combine with [`TrackPredicateExt::and`].

use tracing::warn;

use crate::domain::{Track, WorldPoint};
use crate::network::StationLookup;

use super::error::PredicateError;

/// Decide whether a track is an acceptable match at a given path distance.
///
/// Implementations must be side-effect-free; the locator evaluates a
/// predicate at most once per frontier entry but may evaluate it for the
/// same track more than once across sides and calls.
pub trait TrackPredicate {
    fn test(&self, track: &Track, distance: f64) -> Result<bool, PredicateError>;
}

impl<F> TrackPredicate for F
where
    F: Fn(&Track, f64) -> bool,
{
    fn test(&self, track: &Track, distance: f64) -> Result<bool, PredicateError> {
        Ok(self(track, distance))
    }
}

/// Combinators available on every predicate.
pub trait TrackPredicateExt: TrackPredicate + Sized {
    /// Logical AND. `other` is only evaluated when `self` accepts.
    fn and<P: TrackPredicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }
}

impl<T: TrackPredicate> TrackPredicateExt for T {}

/// Short-circuiting conjunction of two predicates.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

impl<A: TrackPredicate, B: TrackPredicate> TrackPredicate for And<A, B> {
    fn test(&self, track: &Track, distance: f64) -> Result<bool, PredicateError> {
        Ok(self.0.test(track, distance)? && self.1.test(track, distance)?)
    }
}

/// Rejects generic (placeholder/transit) tracks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedTrackFilter;

impl TrackPredicate for NamedTrackFilter {
    fn test(&self, track: &Track, _distance: f64) -> Result<bool, PredicateError> {
        Ok(!track.id.is_generic())
    }
}

/// Classifies yards as secondary (deprioritized) or not.
pub trait YardClassifier {
    fn is_secondary(&self, yard_id: &str) -> bool;
}

impl<F> YardClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_secondary(&self, yard_id: &str) -> bool {
        self(yard_id)
    }
}

/// Secondary yards are suffix extensions of a primary yard's marker.
///
/// With marker `MB`, yards `HMB` and `MFMB` are secondary while `MB` itself
/// is the primary yard.
///
/// # Examples
///
/// ```
/// use track_locator::locator::{SuffixMarker, YardClassifier};
///
/// let marker = SuffixMarker::new("MB");
/// assert!(marker.is_secondary("HMB"));
/// assert!(marker.is_secondary("MFMB"));
/// assert!(!marker.is_secondary("MB"));
/// assert!(!marker.is_secondary("HB"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMarker {
    marker: String,
}

impl SuffixMarker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl YardClassifier for SuffixMarker {
    fn is_secondary(&self, yard_id: &str) -> bool {
        !self.marker.is_empty() && yard_id.ends_with(&self.marker) && yard_id != self.marker
    }
}

/// Rejects secondary-yard tracks beyond a distance budget.
///
/// This deprioritizes rather than forbids: a close secondary-yard track is
/// still accepted.
#[derive(Debug, Clone)]
pub struct DeprioritizedYardFilter<C> {
    classifier: C,
    budget: f64,
}

impl<C: YardClassifier> DeprioritizedYardFilter<C> {
    pub fn new(classifier: C, budget: f64) -> Self {
        Self { classifier, budget }
    }
}

impl<C: YardClassifier> TrackPredicate for DeprioritizedYardFilter<C> {
    fn test(&self, track: &Track, distance: f64) -> Result<bool, PredicateError> {
        if self.classifier.is_secondary(track.id.yard_id()) {
            return Ok(distance <= self.budget);
        }
        Ok(true)
    }
}

/// Rejects tracks whose owning station is too far, in a straight line,
/// from the query point.
///
/// Generic tracks have no owning station and are rejected, as are named
/// tracks whose yard is missing from the lookup.
#[derive(Debug, Clone)]
pub struct StationProximityFilter<'a, S: ?Sized> {
    stations: &'a S,
    query_point: WorldPoint,
    ceiling: f64,
}

impl<'a, S: StationLookup + ?Sized> StationProximityFilter<'a, S> {
    pub fn new(stations: &'a S, query_point: WorldPoint, ceiling: f64) -> Self {
        Self {
            stations,
            query_point,
            ceiling,
        }
    }
}

impl<S: StationLookup + ?Sized> TrackPredicate for StationProximityFilter<'_, S> {
    fn test(&self, track: &Track, _distance: f64) -> Result<bool, PredicateError> {
        if track.id.is_generic() {
            return Ok(false);
        }

        let yard_id = track.id.yard_id();
        let Some(station) = self.stations.station_for_yard(yard_id) else {
            warn!(track = %track.id, yard = yard_id, "No station for yard, skipping track");
            return Ok(false);
        };

        Ok(station.distance_to(&self.query_point) <= self.ceiling)
    }
}
