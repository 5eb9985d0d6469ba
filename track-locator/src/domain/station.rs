//! Stations and world-space positions.

use serde::Deserialize;

/// A point in world coordinates (metres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for WorldPoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A station: the logical owner of every track in one yard.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Yard identifier shared by the station's tracks.
    pub yard_id: String,

    /// Human-readable station name.
    pub name: String,

    /// Position of the station centre.
    pub position: WorldPoint,
}

impl Station {
    pub fn new(yard_id: impl Into<String>, name: impl Into<String>, position: WorldPoint) -> Self {
        Self {
            yard_id: yard_id.into(),
            name: name.into(),
            position,
        }
    }

    /// Straight-line distance from the station centre to a point.
    pub fn distance_to(&self, point: &WorldPoint) -> f64 {
        self.position.distance_to(point)
    }
}
