//! Location hint text.
//!
//! Turns search outcomes into the short diagnostic strings shown to the
//! player. Everything here is pure formatting over already-validated
//! values.

use crate::domain::{TrackId, TrackIndex, WorldPoint};
use crate::locator::LocateOutcome;
use crate::network::{RailGraph, StationLookup};

/// Shown in place of a track id when nothing was found.
const NO_TRACK: &str = "---";

/// How track ids are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStyle {
    /// `HB-B7S`
    Full,

    /// `B7S`
    #[default]
    Short,
}

impl IdStyle {
    pub fn display(self, id: &TrackId) -> String {
        match self {
            IdStyle::Full => id.full_display_id(),
            IdStyle::Short => id.short_display_id().to_string(),
        }
    }
}

/// Where the locomotive is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocoPosition {
    /// Track under the front bogie.
    pub track: TrackIndex,

    /// Position along that track.
    pub position: f64,

    /// World-space position of the locomotive.
    pub world: WorldPoint,

    pub derailed: bool,
}

/// Render a search outcome as one diagnostic line.
///
/// For a match: track id, straight-line distance from the track's station
/// to `query_point`, path distance, steps and iterations. The station
/// distance shows `?` when the station is unknown.
pub fn format_match<G, S>(
    graph: &G,
    outcome: &LocateOutcome,
    stations: &S,
    query_point: &WorldPoint,
    style: IdStyle,
) -> String
where
    G: RailGraph + ?Sized,
    S: StationLookup + ?Sized,
{
    let Some(found) = outcome.found else {
        return format!(
            "{NO_TRACK} | station - | path - | steps - | iterations {}",
            outcome.iterations
        );
    };

    let Some(track) = graph.track(found.track) else {
        return format!(
            "{} | station ? | path {:.2} m | steps {} | iterations {}",
            found.track, found.distance, found.steps, found.iterations
        );
    };

    let station_distance = stations
        .station_for_yard(track.id.yard_id())
        .map(|station| format!("{:.2} m", station.distance_to(query_point)))
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{} | station {} | path {:.2} m | steps {} | iterations {}",
        style.display(&track.id),
        station_distance,
        found.distance,
        found.steps,
        found.iterations
    )
}

/// Full location hint for a locomotive.
///
/// `"derailed"` when derailed. Otherwise the current track (always its
/// full id) with position and length, followed on a second line by the
/// nearest named track in `style` when the search found one. With no match
/// the hint is just the first line.
pub fn location_hint<G, S>(
    graph: &G,
    loco: &LocoPosition,
    outcome: Option<&LocateOutcome>,
    stations: &S,
    style: IdStyle,
) -> String
where
    G: RailGraph + ?Sized,
    S: StationLookup + ?Sized,
{
    if loco.derailed {
        return "derailed".to_string();
    }

    let basic = match graph.track(loco.track) {
        Some(track) => format!(
            "{} {:.2} / {:.2}",
            track.id.full_display_id(),
            loco.position,
            track.length
        ),
        None => format!("{} {:.2}", loco.track, loco.position),
    };

    match outcome {
        Some(outcome) if outcome.found.is_some() => format!(
            "{basic}\n{}",
            format_match(graph, outcome, stations, &loco.world, style)
        ),
        _ => basic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TrackEnd, TrackSide};
    use crate::locator::{StopReason, TrackMatch};
    use crate::network::{RailNetwork, RailNetworkBuilder, StationDirectory};

    fn network() -> RailNetwork {
        let mut builder = RailNetworkBuilder::new();
        let transit = builder
            .add_track(TrackId::parse("#Y-#S-168-#T").unwrap(), 230.5)
            .unwrap();
        let yard = builder
            .add_track(TrackId::parse("HB-B7S").unwrap(), 120.0)
            .unwrap();
        let orphan = builder
            .add_track(TrackId::parse("FF-C1").unwrap(), 80.0)
            .unwrap();
        builder.connect(
            TrackSide::new(transit, TrackEnd::End),
            TrackSide::new(yard, TrackEnd::Start),
        );
        builder.connect(
            TrackSide::new(yard, TrackEnd::End),
            TrackSide::new(orphan, TrackEnd::Start),
        );
        builder.build().unwrap()
    }

    fn stations() -> StationDirectory {
        StationDirectory::new().with("HB", "Harbor", WorldPoint::new(30.0, 0.0, 40.0))
    }

    fn matched(track: usize, distance: f64) -> LocateOutcome {
        LocateOutcome {
            found: Some(TrackMatch {
                track: TrackIndex(track),
                distance,
                steps: 3,
                iterations: 7,
            }),
            iterations: 7,
            stop: StopReason::Matched,
        }
    }

    fn loco(derailed: bool) -> LocoPosition {
        LocoPosition {
            track: TrackIndex(0),
            position: 12.3456,
            world: WorldPoint::default(),
            derailed,
        }
    }

    #[test]
    fn id_styles() {
        let id = TrackId::parse("HB-B7S").unwrap();
        assert_eq!(IdStyle::Full.display(&id), "HB-B7S");
        assert_eq!(IdStyle::Short.display(&id), "B7S");
        assert_eq!(IdStyle::default(), IdStyle::Short);
    }

    #[test]
    fn format_found() {
        let text = format_match(
            &network(),
            &matched(1, 120.0),
            &stations(),
            &WorldPoint::default(),
            IdStyle::Full,
        );
        assert_eq!(
            text,
            "HB-B7S | station 50.00 m | path 120.00 m | steps 3 | iterations 7"
        );
    }

    #[test]
    fn format_unknown_station() {
        let text = format_match(
            &network(),
            &matched(2, 245.1261),
            &stations(),
            &WorldPoint::default(),
            IdStyle::Short,
        );
        assert_eq!(
            text,
            "C1 | station ? | path 245.13 m | steps 3 | iterations 7"
        );
    }

    #[test]
    fn format_absent() {
        let outcome = LocateOutcome {
            found: None,
            iterations: 12,
            stop: StopReason::FrontierExhausted,
        };
        let text = format_match(
            &network(),
            &outcome,
            &stations(),
            &WorldPoint::default(),
            IdStyle::Full,
        );
        assert_eq!(
            text,
            "--- | station - | path - | steps - | iterations 12"
        );
    }

    #[test]
    fn hint_derailed() {
        let hint = location_hint(
            &network(),
            &loco(true),
            Some(&matched(1, 10.0)),
            &stations(),
            IdStyle::Full,
        );
        assert_eq!(hint, "derailed");
    }

    #[test]
    fn hint_without_match_is_basic_line() {
        let outcome = LocateOutcome {
            found: None,
            iterations: 4,
            stop: StopReason::FrontierExhausted,
        };
        let hint = location_hint(
            &network(),
            &loco(false),
            Some(&outcome),
            &stations(),
            IdStyle::Full,
        );
        assert_eq!(hint, "#Y-#S-168-#T 12.35 / 230.50");

        let hint = location_hint(&network(), &loco(false), None, &stations(), IdStyle::Full);
        assert_eq!(hint, "#Y-#S-168-#T 12.35 / 230.50");
    }

    #[test]
    fn hint_with_match_keeps_full_current_id() {
        let hint = location_hint(
            &network(),
            &loco(false),
            Some(&matched(1, 218.1562)),
            &stations(),
            IdStyle::Short,
        );
        assert_eq!(
            hint,
            "#Y-#S-168-#T 12.35 / 230.50\nB7S | station 50.00 m | path 218.16 m | steps 3 | iterations 7"
        );
    }
}
