//! Track connectivity graph.

use std::collections::HashMap;

use crate::domain::{DomainError, Track, TrackEnd, TrackId, TrackIndex, TrackSide};

/// Read access to the track network's topology.
///
/// Implementations must be pure: the same query always yields the same
/// answer for the lifetime of the borrow.
pub trait RailGraph {
    /// Look up a track by index.
    fn track(&self, index: TrackIndex) -> Option<&Track>;

    /// Number of tracks in the graph.
    fn track_count(&self) -> usize;

    /// Sides reachable by crossing the branch(es) at `side`'s end, in
    /// connection order.
    ///
    /// Returns an empty slice for a dead end or an unknown track.
    fn connected_sides(&self, side: TrackSide) -> &[TrackSide];
}

/// In-memory rail network.
///
/// Built once via [`RailNetworkBuilder`] and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    tracks: Vec<Track>,

    /// Branches leaving each track's start and end, indexed like `tracks`.
    branches: Vec<[Vec<TrackSide>; 2]>,

    /// Full id → index, for resolving ids from files and queries.
    by_id: HashMap<String, TrackIndex>,
}

impl RailNetwork {
    /// Resolve a full track id (e.g. `HB-B7S`) to its index.
    pub fn find(&self, full_id: &str) -> Option<TrackIndex> {
        self.by_id.get(full_id).copied()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn end_slot(end: TrackEnd) -> usize {
    match end {
        TrackEnd::Start => 0,
        TrackEnd::End => 1,
    }
}

impl RailGraph for RailNetwork {
    fn track(&self, index: TrackIndex) -> Option<&Track> {
        self.tracks.get(index.0)
    }

    fn track_count(&self) -> usize {
        self.tracks.len()
    }

    fn connected_sides(&self, side: TrackSide) -> &[TrackSide] {
        self.branches
            .get(side.track.0)
            .map(|ends| ends[end_slot(side.end)].as_slice())
            .unwrap_or(&[])
    }
}

/// Builder for [`RailNetwork`].
///
/// Tracks are validated as they are added; connections are validated by
/// [`build`](Self::build) so they can be declared in any order.
#[derive(Debug, Default)]
pub struct RailNetworkBuilder {
    inner: RailNetwork,
    links: Vec<(TrackSide, TrackSide)>,
}

impl RailNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track and return its index.
    ///
    /// A track added under an already-used full id shadows the earlier one
    /// in [`RailNetwork::find`]; callers that need unique ids check first.
    pub fn add_track(&mut self, id: TrackId, length: f64) -> Result<TrackIndex, DomainError> {
        let track = Track::new(id, length)?;
        let index = TrackIndex(self.inner.tracks.len());
        self.inner.by_id.insert(track.id.to_string(), index);
        self.inner.tracks.push(track);
        self.inner.branches.push([Vec::new(), Vec::new()]);
        Ok(index)
    }

    /// Whether a track with this full id has been added.
    pub fn contains(&self, full_id: &str) -> bool {
        self.inner.by_id.contains_key(full_id)
    }

    /// Index of a previously added track.
    pub fn find(&self, full_id: &str) -> Option<TrackIndex> {
        self.inner.find(full_id)
    }

    /// Connect two track ends in both directions, as a physical junction is.
    pub fn connect(&mut self, a: TrackSide, b: TrackSide) -> &mut Self {
        self.links.push((a, b));
        self.links.push((b, a));
        self
    }

    /// Add a branch that can only be crossed from `from` to `to`.
    pub fn connect_one_way(&mut self, from: TrackSide, to: TrackSide) -> &mut Self {
        self.links.push((from, to));
        self
    }

    /// Validate connections and produce the network.
    ///
    /// Repeated connections between the same pair of sides are kept once,
    /// at the position of their first declaration.
    pub fn build(mut self) -> Result<RailNetwork, DomainError> {
        let count = self.inner.tracks.len();

        for (from, to) in self.links {
            for side in [from, to] {
                if side.track.0 >= count {
                    return Err(DomainError::UnknownTrackIndex(side.track));
                }
            }

            let targets = &mut self.inner.branches[from.track.0][end_slot(from.end)];
            if !targets.contains(&to) {
                targets.push(to);
            }
        }

        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> TrackId {
        TrackId::parse(s).unwrap()
    }

    #[test]
    fn empty_network() {
        let network = RailNetworkBuilder::new().build().unwrap();
        assert!(network.is_empty());
        assert_eq!(network.track_count(), 0);
        assert!(network.track(TrackIndex(0)).is_none());
        assert!(
            network
                .connected_sides(TrackSide::start(TrackIndex(0)))
                .is_empty()
        );
    }

    #[test]
    fn add_and_find_tracks() {
        let mut builder = RailNetworkBuilder::new();
        let a = builder.add_track(id("HB-A1"), 100.0).unwrap();
        let b = builder.add_track(id("HB-A2"), 50.0).unwrap();
        assert!(builder.contains("HB-A1"));
        let network = builder.build().unwrap();

        assert_eq!(network.len(), 2);
        assert_eq!(network.find("HB-A1"), Some(a));
        assert_eq!(network.find("HB-A2"), Some(b));
        assert_eq!(network.find("HB-A3"), None);
        assert_eq!(network.track(b).unwrap().length, 50.0);
    }

    #[test]
    fn add_track_rejects_bad_length() {
        let mut builder = RailNetworkBuilder::new();
        assert!(builder.add_track(id("HB-A1"), 0.0).is_err());
        assert!(!builder.contains("HB-A1"));
    }

    #[test]
    fn connect_is_symmetric() {
        let mut builder = RailNetworkBuilder::new();
        let a = builder.add_track(id("HB-A1"), 100.0).unwrap();
        let b = builder.add_track(id("HB-A2"), 50.0).unwrap();
        builder.connect(TrackSide::end(a), TrackSide::start(b));
        let network = builder.build().unwrap();

        assert_eq!(
            network.connected_sides(TrackSide::end(a)),
            &[TrackSide::start(b)]
        );
        assert_eq!(
            network.connected_sides(TrackSide::start(b)),
            &[TrackSide::end(a)]
        );
        assert!(network.connected_sides(TrackSide::start(a)).is_empty());
        assert!(network.connected_sides(TrackSide::end(b)).is_empty());
    }

    #[test]
    fn connect_one_way_is_directed() {
        let mut builder = RailNetworkBuilder::new();
        let a = builder.add_track(id("HB-A1"), 100.0).unwrap();
        let b = builder.add_track(id("HB-A2"), 50.0).unwrap();
        builder.connect_one_way(TrackSide::end(a), TrackSide::start(b));
        let network = builder.build().unwrap();

        assert_eq!(network.connected_sides(TrackSide::end(a)).len(), 1);
        assert!(network.connected_sides(TrackSide::start(b)).is_empty());
    }

    #[test]
    fn switch_fan_out_keeps_order_and_dedups() {
        let mut builder = RailNetworkBuilder::new();
        let a = builder.add_track(id("#Y-#S-1-#T"), 10.0).unwrap();
        let b = builder.add_track(id("HB-B1"), 10.0).unwrap();
        let c = builder.add_track(id("HB-B2"), 10.0).unwrap();
        builder
            .connect_one_way(TrackSide::end(a), TrackSide::start(b))
            .connect_one_way(TrackSide::end(a), TrackSide::start(c))
            .connect_one_way(TrackSide::end(a), TrackSide::start(b));
        let network = builder.build().unwrap();

        assert_eq!(
            network.connected_sides(TrackSide::end(a)),
            &[TrackSide::start(b), TrackSide::start(c)]
        );
    }

    #[test]
    fn build_rejects_unknown_index() {
        let mut builder = RailNetworkBuilder::new();
        let a = builder.add_track(id("HB-A1"), 100.0).unwrap();
        builder.connect(TrackSide::end(a), TrackSide::start(TrackIndex(9)));

        assert_eq!(
            builder.build().unwrap_err(),
            DomainError::UnknownTrackIndex(TrackIndex(9))
        );
    }
}
