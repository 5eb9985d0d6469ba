//! User settings.
//!
//! Settings are read from a JSON file once and converted into explicit
//! configuration values; nothing in the library reads them ambiently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hint::IdStyle;
use crate::locator::{
    DEFAULT_MAX_DISTANCE, DEFAULT_SECONDARY_YARD_DISTANCE, DEFAULT_STATION_PROXIMITY_CEILING,
    LocatorConfig, NamedTrackSearchConfig, SuffixMarker,
};

/// Default marker identifying secondary yards (`HMB`, `MFMB`, ...).
pub const DEFAULT_SECONDARY_YARD_MARKER: &str = "MB";

/// Errors from loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid settings JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting has an unusable value
    #[error("invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// User-facing settings for the location hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show `HB-B7S` rather than `B7S`.
    pub show_full_track_ids: bool,

    /// Maximum straight-line distance from a track's station centre to the
    /// locomotive (metres).
    pub max_station_center_distance: f64,

    /// Maximum path distance searched (metres).
    pub max_track_distance: f64,

    /// Secondary-yard tracks beyond this path distance are only a fallback
    /// (metres).
    pub max_secondary_yard_distance: f64,

    /// Optional cap on search expansions.
    pub max_search_iterations: Option<usize>,

    /// Yards ending in this marker, other than the marker itself, are
    /// secondary.
    pub secondary_yard_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_full_track_ids: false,
            max_station_center_distance: DEFAULT_STATION_PROXIMITY_CEILING,
            max_track_distance: DEFAULT_MAX_DISTANCE,
            max_secondary_yard_distance: DEFAULT_SECONDARY_YARD_DISTANCE,
            max_search_iterations: None,
            secondary_yard_marker: DEFAULT_SECONDARY_YARD_MARKER.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file does
    /// not exist. Missing fields take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Check that every distance is positive and finite.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, value) in [
            ("max_station_center_distance", self.max_station_center_distance),
            ("max_track_distance", self.max_track_distance),
            ("max_secondary_yard_distance", self.max_secondary_yard_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    name,
                    reason: format!("must be positive and finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Search configuration for the named-track search.
    pub fn search_config(&self) -> NamedTrackSearchConfig {
        let mut locator = LocatorConfig::new(self.max_track_distance);
        locator.max_iterations = self.max_search_iterations;

        NamedTrackSearchConfig {
            locator,
            secondary_yard_distance: self.max_secondary_yard_distance,
            station_proximity_ceiling: self.max_station_center_distance,
        }
    }

    pub fn yard_classifier(&self) -> SuffixMarker {
        SuffixMarker::new(self.secondary_yard_marker.clone())
    }

    pub fn id_style(&self) -> IdStyle {
        if self.show_full_track_ids {
            IdStyle::Full
        } else {
            IdStyle::Short
        }
    }
}
