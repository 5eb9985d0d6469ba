//! Conversion from network file DTOs to the in-memory network.

use std::path::Path;

use tracing::debug;

use crate::domain::{Station, TrackEnd, TrackId, TrackSide};

use super::error::LoadError;
use super::file::{EndDto, NetworkFile, SideDto};
use super::graph::{RailNetwork, RailNetworkBuilder};
use super::stations::StationDirectory;

/// A network together with its station directory.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub network: RailNetwork,
    pub stations: StationDirectory,
}

/// Read and convert a network file from disk.
pub fn load_network(path: impl AsRef<Path>) -> Result<LoadedNetwork, LoadError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_network(&text)
}

/// Parse and convert network JSON.
pub fn parse_network(json: &str) -> Result<LoadedNetwork, LoadError> {
    let file: NetworkFile = serde_json::from_str(json)?;
    convert_network_file(file)
}

fn convert_network_file(file: NetworkFile) -> Result<LoadedNetwork, LoadError> {
    let mut builder = RailNetworkBuilder::new();

    for track in &file.tracks {
        if builder.contains(&track.id) {
            return Err(LoadError::DuplicateTrack(track.id.clone()));
        }
        let id = TrackId::parse(&track.id)?;
        builder.add_track(id, track.length)?;
    }

    for conn in &file.connections {
        let from = resolve_side(&builder, &conn.from)?;
        let to = resolve_side(&builder, &conn.to)?;
        if conn.one_way {
            builder.connect_one_way(from, to);
        } else {
            builder.connect(from, to);
        }
    }

    let mut stations = StationDirectory::new();
    for dto in file.stations {
        let name = dto.name.unwrap_or_else(|| dto.yard.clone());
        let yard = dto.yard.clone();
        if stations
            .insert(Station::new(dto.yard, name, dto.position))
            .is_some()
        {
            return Err(LoadError::DuplicateStation(yard));
        }
    }

    let network = builder.build()?;

    debug!(
        tracks = network.len(),
        connections = file.connections.len(),
        stations = stations.len(),
        "Loaded rail network"
    );

    Ok(LoadedNetwork { network, stations })
}

fn resolve_side(builder: &RailNetworkBuilder, side: &SideDto) -> Result<TrackSide, LoadError> {
    let track = builder
        .find(&side.track)
        .ok_or_else(|| LoadError::UnknownTrack(side.track.clone()))?;
    let end = match side.end {
        EndDto::Start => TrackEnd::Start,
        EndDto::End => TrackEnd::End,
    };
    Ok(TrackSide::new(track, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{RailGraph, StationLookup};
    use std::io::Write;

    const SMALL: &str = r##"{
        "tracks": [
            {"id": "#Y-#S-1-#T", "length": 200.0},
            {"id": "HB-B1", "length": 80.0},
            {"id": "HB-B2", "length": 90.0}
        ],
        "connections": [
            {"from": {"track": "#Y-#S-1-#T", "end": "end"}, "to": {"track": "HB-B1", "end": "start"}},
            {"from": {"track": "#Y-#S-1-#T", "end": "end"}, "to": {"track": "HB-B2", "end": "start"}, "one_way": true}
        ],
        "stations": [
            {"yard": "HB", "name": "Harbor", "position": [0.0, 0.0, 0.0]}
        ]
    }"##;

    #[test]
    fn parse_small_network() {
        let loaded = parse_network(SMALL).unwrap();
        let network = &loaded.network;

        let transit = network.find("#Y-#S-1-#T").unwrap();
        let b1 = network.find("HB-B1").unwrap();
        let b2 = network.find("HB-B2").unwrap();

        assert_eq!(network.track_count(), 3);
        assert!(network.track(transit).unwrap().id.is_generic());
        assert_eq!(
            network.connected_sides(TrackSide::end(transit)),
            &[TrackSide::start(b1), TrackSide::start(b2)]
        );
        // Two-way connection is mirrored, one-way is not
        assert_eq!(
            network.connected_sides(TrackSide::start(b1)),
            &[TrackSide::end(transit)]
        );
        assert!(network.connected_sides(TrackSide::start(b2)).is_empty());

        assert_eq!(loaded.stations.station_for_yard("HB").unwrap().name, "Harbor");
    }

    #[test]
    fn station_name_defaults_to_yard() {
        let json = r#"{"tracks": [], "stations": [{"yard": "SM", "position": [1, 2, 3]}]}"#;
        let loaded = parse_network(json).unwrap();
        assert_eq!(loaded.stations.get("SM").unwrap().name, "SM");
    }

    #[test]
    fn reject_duplicate_track() {
        let json = r#"{"tracks": [{"id": "HB-B1", "length": 1.0}, {"id": "HB-B1", "length": 2.0}]}"#;
        assert!(matches!(
            parse_network(json),
            Err(LoadError::DuplicateTrack(id)) if id == "HB-B1"
        ));
    }

    #[test]
    fn reject_unknown_connection_track() {
        let json = r#"{
            "tracks": [{"id": "HB-B1", "length": 1.0}],
            "connections": [{"from": {"track": "HB-B1", "end": "end"}, "to": {"track": "HB-B9", "end": "start"}}]
        }"#;
        assert!(matches!(
            parse_network(json),
            Err(LoadError::UnknownTrack(id)) if id == "HB-B9"
        ));
    }

    #[test]
    fn reject_invalid_length() {
        let json = r#"{"tracks": [{"id": "HB-B1", "length": -3.0}]}"#;
        assert!(matches!(parse_network(json), Err(LoadError::Domain(_))));
    }

    #[test]
    fn reject_invalid_id() {
        let json = r#"{"tracks": [{"id": "nodash", "length": 3.0}]}"#;
        assert!(matches!(parse_network(json), Err(LoadError::Domain(_))));
    }

    #[test]
    fn reject_duplicate_station() {
        let json = r#"{"tracks": [], "stations": [
            {"yard": "SM", "position": [0, 0, 0]},
            {"yard": "SM", "position": [1, 1, 1]}
        ]}"#;
        assert!(matches!(
            parse_network(json),
            Err(LoadError::DuplicateStation(yard)) if yard == "SM"
        ));
    }

    #[test]
    fn reject_malformed_json() {
        assert!(matches!(parse_network("{"), Err(LoadError::Json(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let loaded = load_network(file.path()).unwrap();
        assert_eq!(loaded.network.len(), 3);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_network(dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
