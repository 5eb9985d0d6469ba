//! Bounded best-first track search.
//!
//! Starting from a position on a track, explores track sides in order of
//! path distance until a track satisfies the predicate or the search radius
//! is exhausted. Crossing a switch is free; distance is only consumed by
//! running the length of a track.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, trace};

use crate::domain::{Track, TrackIndex, TrackSide};
use crate::network::RailGraph;

use super::config::LocatorConfig;
use super::error::LocateError;
use super::predicate::TrackPredicate;

/// A track accepted by the predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMatch {
    /// The matching track.
    pub track: TrackIndex,

    /// Path distance from the start position.
    pub distance: f64,

    /// Frontier hops taken to reach the track (0 for the start track).
    pub steps: usize,

    /// Expansions performed up to and including the match.
    pub iterations: usize,
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The start track itself matched.
    Immediate,

    /// A track was found during expansion.
    Matched,

    /// Every reachable side within range was expanded without a match.
    FrontierExhausted,

    /// The configured iteration cap was reached before a match.
    IterationLimit,
}

/// Result of a locate call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocateOutcome {
    /// The nearest matching track, if any.
    pub found: Option<TrackMatch>,

    /// Expansions performed.
    pub iterations: usize,

    pub stop: StopReason,
}

impl LocateOutcome {
    fn matched(found: TrackMatch, stop: StopReason) -> Self {
        Self {
            iterations: found.iterations,
            found: Some(found),
            stop,
        }
    }

    fn not_found(iterations: usize, stop: StopReason) -> Self {
        Self {
            found: None,
            iterations,
            stop,
        }
    }

    /// Whether the iteration cap, rather than the graph, ended the search.
    pub fn hit_iteration_limit(&self) -> bool {
        self.stop == StopReason::IterationLimit
    }
}

/// A pending expansion.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    side: TrackSide,
    distance: f64,
    steps: usize,

    /// Discovery order, used to break distance ties.
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the nearest, earliest-discovered entry.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of frontier entries with stable tie-breaking.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    fn push(&mut self, side: TrackSide, distance: f64, steps: usize) {
        self.heap.push(FrontierEntry {
            side,
            distance,
            steps,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Finds the nearest track satisfying a predicate, within a bounded radius.
///
/// The graph is borrowed for the lifetime of the locator, so it cannot
/// change underneath a search in progress.
pub struct TrackLocator<'a, G: RailGraph + ?Sized> {
    graph: &'a G,
    config: &'a LocatorConfig,
}

impl<'a, G: RailGraph + ?Sized> TrackLocator<'a, G> {
    pub fn new(graph: &'a G, config: &'a LocatorConfig) -> Self {
        Self { graph, config }
    }

    /// Find the nearest track, by path distance from `start_position` on
    /// `start`, for which `predicate` holds.
    ///
    /// Ties at equal distance go to the side discovered first. A search
    /// expands each track side at most once, so it performs at most
    /// `2 × track_count` iterations even on cyclic graphs.
    ///
    /// Returns an error for invalid inputs or a failing predicate; finding
    /// nothing is a successful outcome with `found == None`.
    pub fn locate<P>(
        &self,
        start: TrackIndex,
        start_position: f64,
        predicate: &P,
    ) -> Result<LocateOutcome, LocateError>
    where
        P: TrackPredicate + ?Sized,
    {
        let max_distance = self.config.max_distance;
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(LocateError::InvalidMaxDistance(max_distance));
        }

        let start_track = self
            .graph
            .track(start)
            .ok_or(LocateError::UnknownTrack(start))?;

        if !start_position.is_finite() || start_position < 0.0 || start_position > start_track.length
        {
            return Err(LocateError::InvalidStartPosition {
                position: start_position,
                length: start_track.length,
            });
        }

        debug!(
            track = %start_track.id,
            position = start_position,
            max_distance,
            "Starting track search"
        );

        if predicate.test(start_track, 0.0)? {
            debug!(track = %start_track.id, "Start track matches");
            return Ok(LocateOutcome::matched(
                TrackMatch {
                    track: start,
                    distance: 0.0,
                    steps: 0,
                    iterations: 0,
                },
                StopReason::Immediate,
            ));
        }

        let mut frontier = Frontier::default();
        let mut visited: HashSet<TrackSide> = HashSet::new();
        let mut iterations = 0;

        for (side, distance) in [
            (TrackSide::start(start), start_position),
            (TrackSide::end(start), start_track.length - start_position),
        ] {
            if distance < max_distance {
                frontier.push(side, distance, 1);
            }
        }

        while let Some(entry) = frontier.pop() {
            if visited.contains(&entry.side) {
                continue;
            }

            if let Some(limit) = self.config.max_iterations {
                if iterations >= limit {
                    debug!(iterations, "Track search hit iteration limit");
                    return Ok(LocateOutcome::not_found(
                        iterations,
                        StopReason::IterationLimit,
                    ));
                }
            }

            visited.insert(entry.side);
            iterations += 1;

            let track = self.expect_track(entry.side.track)?;

            trace!(
                iteration = iterations,
                track = %track.id,
                end = ?entry.side.end,
                distance = entry.distance,
                steps = entry.steps,
                "Expanding track side"
            );

            if predicate.test(track, entry.distance)? {
                debug!(
                    track = %track.id,
                    distance = entry.distance,
                    steps = entry.steps,
                    iterations,
                    "Track search matched"
                );
                return Ok(LocateOutcome::matched(
                    TrackMatch {
                        track: entry.side.track,
                        distance: entry.distance,
                        steps: entry.steps,
                        iterations,
                    },
                    StopReason::Matched,
                ));
            }

            for &next in self.graph.connected_sides(entry.side) {
                frontier.push(next, entry.distance, entry.steps + 1);
            }

            let through = entry.distance + track.length;
            if through < max_distance {
                frontier.push(entry.side.opposite(), through, entry.steps + 1);
            }
        }

        debug!(iterations, "Track search exhausted without a match");
        Ok(LocateOutcome::not_found(
            iterations,
            StopReason::FrontierExhausted,
        ))
    }

    /// Tracks reached through branches must exist; a graph that links to a
    /// missing track is reported like a missing start track.
    fn expect_track(&self, index: TrackIndex) -> Result<&'a Track, LocateError> {
        self.graph
            .track(index)
            .ok_or(LocateError::UnknownTrack(index))
    }
}
