//! Search configuration for the track locator.

/// Default search radius along the rails (metres).
pub const DEFAULT_MAX_DISTANCE: f64 = 800.0;

/// Default budget within which secondary-yard tracks are acceptable (metres).
pub const DEFAULT_SECONDARY_YARD_DISTANCE: f64 = 400.0;

/// Default straight-line ceiling between a track's station and the query point (metres).
pub const DEFAULT_STATION_PROXIMITY_CEILING: f64 = 1000.0;

/// Configuration for a single bounded search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    /// Maximum path distance. Frontier entries at or beyond this are pruned.
    pub max_distance: f64,

    /// Optional cap on the number of expansions.
    /// Reaching it ends the search without a match.
    pub max_iterations: Option<usize>,
}

impl LocatorConfig {
    /// Create a configuration with the given radius and no iteration cap.
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            max_iterations: None,
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

/// Configuration for the named-track search built on top of the locator.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTrackSearchConfig {
    /// Radius and iteration cap for each pass.
    pub locator: LocatorConfig,

    /// Secondary-yard tracks further than this along the rails are only
    /// used as a fallback.
    pub secondary_yard_distance: f64,

    /// Tracks whose station centre is further than this from the query
    /// point are never accepted.
    pub station_proximity_ceiling: f64,
}

impl Default for NamedTrackSearchConfig {
    fn default() -> Self {
        Self {
            locator: LocatorConfig::default(),
            secondary_yard_distance: DEFAULT_SECONDARY_YARD_DISTANCE,
            station_proximity_ceiling: DEFAULT_STATION_PROXIMITY_CEILING,
        }
    }
}
