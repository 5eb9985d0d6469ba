//! Network file DTOs.
//!
//! These types map directly to the JSON network export. Optional fields
//! default rather than fail so hand-written fixtures stay short.

use serde::Deserialize;

use crate::domain::WorldPoint;

/// Top-level network file.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkFile {
    /// Every track in the network.
    pub tracks: Vec<TrackDto>,

    /// Junctions between track ends.
    #[serde(default)]
    pub connections: Vec<ConnectionDto>,

    /// Station centres, one per yard.
    #[serde(default)]
    pub stations: Vec<StationDto>,
}

/// A track entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDto {
    /// Full track id, e.g. `HB-B7S` or `#Y-#S-168-#T`.
    pub id: String,

    /// Track length in metres.
    pub length: f64,
}

/// Which end of a track a connection attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndDto {
    Start,
    End,
}

/// One side of a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct SideDto {
    /// Full id of the track.
    pub track: String,
    pub end: EndDto,
}

/// A junction between two track ends.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    pub from: SideDto,
    pub to: SideDto,

    /// Only traversable from `from` to `to`.
    #[serde(default)]
    pub one_way: bool,
}

/// A station entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    /// Yard identifier the station owns.
    pub yard: String,

    /// Display name. Defaults to the yard id.
    pub name: Option<String>,

    /// Station centre as `[x, y, z]`.
    pub position: WorldPoint,
}
