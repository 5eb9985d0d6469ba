//! Named-track search: the nearest real yard track to a locomotive.
//!
//! Runs the locator with the standard filter stack. Secondary-yard tracks
//! beyond their budget are not forbidden outright: when nothing else is in
//! range, a second pass without the secondary-yard filter supplies them as
//! a fallback.

use tracing::debug;

use crate::domain::{TrackIndex, WorldPoint};
use crate::network::{RailGraph, StationLookup};

use super::config::NamedTrackSearchConfig;
use super::error::LocateError;
use super::predicate::{
    DeprioritizedYardFilter, NamedTrackFilter, StationProximityFilter, TrackPredicateExt,
    YardClassifier,
};
use super::search::{LocateOutcome, TrackLocator, TrackMatch};

/// Which pass produced a named-track result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPass {
    /// All filters applied.
    Preferred,

    /// Only a secondary-yard track beyond its budget was in range.
    SecondaryFallback,
}

/// Result of a named-track search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedTrackResult {
    /// Outcome of the last pass run.
    pub outcome: LocateOutcome,

    /// Pass that produced the match, if any.
    pub pass: Option<SearchPass>,

    /// Iterations summed over all passes.
    pub total_iterations: usize,
}

impl NamedTrackResult {
    pub fn found(&self) -> Option<&TrackMatch> {
        self.outcome.found.as_ref()
    }
}

/// Finds the nearest named yard track, preferring primary yards.
pub struct NamedTrackSearch<'a, S: ?Sized, C> {
    config: &'a NamedTrackSearchConfig,
    stations: &'a S,
    classifier: C,
}

impl<'a, S, C> NamedTrackSearch<'a, S, C>
where
    S: StationLookup + ?Sized,
    C: YardClassifier,
{
    pub fn new(config: &'a NamedTrackSearchConfig, stations: &'a S, classifier: C) -> Self {
        Self {
            config,
            stations,
            classifier,
        }
    }

    /// Search from `position` on `start`, with the locomotive at
    /// `query_point` in world space.
    pub fn search<G: RailGraph + ?Sized>(
        &self,
        graph: &G,
        start: TrackIndex,
        position: f64,
        query_point: WorldPoint,
    ) -> Result<NamedTrackResult, LocateError> {
        let locator = TrackLocator::new(graph, &self.config.locator);
        let near_station = || {
            StationProximityFilter::new(
                self.stations,
                query_point,
                self.config.station_proximity_ceiling,
            )
        };

        let preferred = NamedTrackFilter
            .and(DeprioritizedYardFilter::new(
                |yard: &str| self.classifier.is_secondary(yard),
                self.config.secondary_yard_distance,
            ))
            .and(near_station());
        let first = locator.locate(start, position, &preferred)?;

        if first.found.is_some() {
            return Ok(NamedTrackResult {
                outcome: first,
                pass: Some(SearchPass::Preferred),
                total_iterations: first.iterations,
            });
        }

        let fallback = NamedTrackFilter.and(near_station());
        let second = locator.locate(start, position, &fallback)?;
        let total_iterations = first.iterations + second.iterations;

        if second.found.is_some() {
            debug!(
                distance = ?second.found.map(|m| m.distance),
                "Using secondary-yard track since no other track is close enough"
            );
        }

        Ok(NamedTrackResult {
            outcome: second,
            pass: second.found.map(|_| SearchPass::SecondaryFallback),
            total_iterations,
        })
    }
}
