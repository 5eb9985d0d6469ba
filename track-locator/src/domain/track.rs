//! Track identity and traversal types.

use std::fmt;

use super::DomainError;

/// Marker the game uses inside placeholder track ids (e.g. `#Y-#S-168-#T`).
const GENERIC_MARKER: char = '#';

/// Identity of a track: the yard it belongs to plus the track part.
///
/// Ids are written `<yard>-<part>` by the game, so `HB-B7S` is part `B7S`
/// of yard `HB`. Transit and placeholder tracks carry the `#` marker and
/// are classed as *generic*; everything else is a *named* yard track.
///
/// # Examples
///
/// ```
/// use track_locator::domain::TrackId;
///
/// let id = TrackId::parse("HB-B7S").unwrap();
/// assert_eq!(id.yard_id(), "HB");
/// assert_eq!(id.part(), "B7S");
/// assert!(!id.is_generic());
///
/// let transit = TrackId::parse("#Y-#S-168-#T").unwrap();
/// assert!(transit.is_generic());
///
/// // An id must have both halves
/// assert!(TrackId::parse("HB").is_err());
/// assert!(TrackId::parse("-B7S").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId {
    yard_id: String,
    part: String,
    generic: bool,
}

impl TrackId {
    /// Parse a full track id of the form `<yard>-<part>`.
    ///
    /// The split happens at the first `-`; the part may itself contain
    /// dashes.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let (yard_id, part) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidTrackId(s.to_string()))?;

        if yard_id.is_empty() || part.is_empty() {
            return Err(DomainError::InvalidTrackId(s.to_string()));
        }

        Ok(Self {
            yard_id: yard_id.to_string(),
            part: part.to_string(),
            generic: s.contains(GENERIC_MARKER),
        })
    }

    /// Identifier of the owning yard.
    pub fn yard_id(&self) -> &str {
        &self.yard_id
    }

    /// Track part within the yard.
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Whether this is a placeholder/transit track rather than a real
    /// destination.
    pub fn is_generic(&self) -> bool {
        self.generic
    }

    /// Full display form, `<yard>-<part>`.
    pub fn full_display_id(&self) -> String {
        format!("{}-{}", self.yard_id, self.part)
    }

    /// Short display form: the track part only.
    pub fn short_display_id(&self) -> &str {
        &self.part
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.yard_id, self.part)
    }
}

/// A track in the rail network.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: TrackId,

    /// Physical length in metres. Always positive and finite.
    pub length: f64,
}

impl Track {
    /// Create a track, rejecting lengths that are not positive and finite.
    pub fn new(id: TrackId, length: f64) -> Result<Self, DomainError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(DomainError::InvalidLength {
                track: id.to_string(),
                length,
            });
        }
        Ok(Self { id, length })
    }
}

/// Dense index of a track within a [`RailNetwork`](crate::network::RailNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackIndex(pub usize);

impl fmt::Display for TrackIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the two ends of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackEnd {
    Start,
    End,
}

impl TrackEnd {
    /// The other end of the same track.
    pub fn opposite(self) -> Self {
        match self {
            TrackEnd::Start => TrackEnd::End,
            TrackEnd::End => TrackEnd::Start,
        }
    }
}

/// A directed graph node: a track together with the end being arrived at
/// or left from.
///
/// Traversal works on sides rather than tracks because the end determines
/// which branches are reachable next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackSide {
    pub track: TrackIndex,
    pub end: TrackEnd,
}

impl TrackSide {
    pub fn new(track: TrackIndex, end: TrackEnd) -> Self {
        Self { track, end }
    }

    pub fn start(track: TrackIndex) -> Self {
        Self::new(track, TrackEnd::Start)
    }

    pub fn end(track: TrackIndex) -> Self {
        Self::new(track, TrackEnd::End)
    }

    /// The side at the far end of the same track.
    pub fn opposite(self) -> Self {
        Self::new(self.track, self.end.opposite())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing a well-formed id round-trips through Display
        #[test]
        fn display_roundtrip(yard in "[A-Z]{1,4}", part in "[A-Z0-9]{1,4}") {
            let full = format!("{yard}-{part}");
            let id = TrackId::parse(&full).unwrap();
            prop_assert_eq!(id.to_string(), full);
            prop_assert!(!id.is_generic());
        }

        /// Any id carrying the placeholder marker is generic
        #[test]
        fn marker_means_generic(yard in "#?[A-Z]{1,3}", part in "[A-Z0-9]{0,3}#[A-Z0-9]{0,3}") {
            let id = TrackId::parse(&format!("{yard}-{part}")).unwrap();
            prop_assert!(id.is_generic());
        }
    }
}
