//! Location hint service.
//!
//! Ties a loaded network and the user's settings together and answers
//! "what hint should be shown for a locomotive here?".

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::WorldPoint;
use crate::hint::{LocoPosition, location_hint};
use crate::locator::{LocateError, NamedTrackSearch};
use crate::network::{LoadedNetwork, RailGraph};
use crate::settings::Settings;

/// Errors from producing a hint.
#[derive(Debug, thiserror::Error)]
pub enum HintError {
    /// Reading the query file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Query file is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The query names a track not in the network
    #[error("unknown track: {0}")]
    UnknownTrack(String),

    /// The search rejected its inputs
    #[error(transparent)]
    Locate(#[from] LocateError),
}

/// Where the locomotive is, as exported by the game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocoQuery {
    /// Full id of the track under the front bogie.
    pub track: String,

    /// Position along that track (metres from its start).
    pub position: f64,

    /// World-space position of the locomotive as `[x, y, z]`.
    pub world_position: WorldPoint,

    #[serde(default)]
    pub derailed: bool,
}

impl LocoQuery {
    /// Read a query from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HintError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Produces location hints against one network.
pub struct LocationHintService {
    loaded: LoadedNetwork,
    settings: Settings,
}

impl LocationHintService {
    pub fn new(loaded: LoadedNetwork, settings: Settings) -> Self {
        Self { loaded, settings }
    }

    /// Build the hint text for a locomotive.
    ///
    /// A derailed locomotive gets no search. When the search finds nothing
    /// the hint falls back to the current track alone.
    pub fn hint(&self, query: &LocoQuery) -> Result<String, HintError> {
        let network = &self.loaded.network;
        let stations = &self.loaded.stations;
        let style = self.settings.id_style();

        let track = network
            .find(&query.track)
            .ok_or_else(|| HintError::UnknownTrack(query.track.clone()))?;
        let loco = LocoPosition {
            track,
            position: query.position,
            world: query.world_position,
            derailed: query.derailed,
        };

        if loco.derailed {
            return Ok(location_hint(network, &loco, None, stations, style));
        }

        let config = self.settings.search_config();
        let search = NamedTrackSearch::new(&config, stations, self.settings.yard_classifier());
        let result = search.search(network, track, query.position, query.world_position)?;

        match result.found() {
            Some(found) => debug!(
                track = %query.track,
                found = ?network.track(found.track).map(|t| t.id.to_string()),
                pass = ?result.pass,
                "Resolved nearest named track"
            ),
            None => warn!(
                track = %query.track,
                iterations = result.total_iterations,
                "No yard tracks found within search radius"
            ),
        }

        Ok(location_hint(
            network,
            &loco,
            Some(&result.outcome),
            stations,
            style,
        ))
    }
}
