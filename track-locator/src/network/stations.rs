//! Station lookup by yard identifier.

use std::collections::HashMap;

use crate::domain::{Station, WorldPoint};

/// Resolve the station that owns a yard.
pub trait StationLookup {
    /// The station for `yard_id`, if one is known.
    fn station_for_yard(&self, yard_id: &str) -> Option<&Station>;
}

/// Yard id → station map.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: HashMap<String, Station>,
}

impl StationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station, returning the one it replaced for the same yard.
    pub fn insert(&mut self, station: Station) -> Option<Station> {
        self.stations.insert(station.yard_id.clone(), station)
    }

    /// Convenience for building directories in code.
    pub fn with(mut self, yard_id: &str, name: &str, position: WorldPoint) -> Self {
        self.insert(Station::new(yard_id, name, position));
        self
    }

    pub fn get(&self, yard_id: &str) -> Option<&Station> {
        self.stations.get(yard_id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationLookup for StationDirectory {
    fn station_for_yard(&self, yard_id: &str) -> Option<&Station> {
        self.get(yard_id)
    }
}
