//! Station identifier and record types.

use std::collections::BTreeSet;
use std::fmt;

use super::{GeoPoint, LineId};

/// Numeric station identifier, as used by the network dataset.
///
/// Identity is by id alone: two stations may share a name (e.g. the two
/// Edgware Road stations) and still be distinct.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u32);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station on the network.
///
/// The set of serving lines is filled in by the network builder from the
/// segments that touch the station; the dataset's own line count is only
/// used as a consistency check.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Name as printed on the map. May be the same as `name`.
    pub display_name: String,
    pub location: GeoPoint,
    /// Fare zone. Boundary stations use halves, e.g. `2.5`.
    pub zone: f32,
    /// Whether the station is a National Rail interchange.
    pub rail: bool,
    pub lines: BTreeSet<LineId>,
}

impl Station {
    /// Create a station with no lines attached yet.
    pub fn new(id: StationId, name: impl Into<String>, location: GeoPoint) -> Self {
        let name = name.into();
        Self {
            id,
            display_name: name.clone(),
            name,
            location,
            zone: 1.0,
            rail: false,
            lines: BTreeSet::new(),
        }
    }

    /// Set the fare zone.
    pub fn with_zone(mut self, zone: f32) -> Self {
        self.zone = zone;
        self
    }

    /// Set the map display name.
    ///
    /// The dataset encodes line breaks as `<br />`; these become spaces.
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name
            .split("<br />")
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        self
    }

    /// Mark the station as a National Rail interchange.
    pub fn with_rail(mut self, rail: bool) -> Self {
        self.rail = rail;
        self
    }

    /// Whether more than one line serves this station.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}
