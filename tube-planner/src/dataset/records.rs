//! Raw CSV rows.

use serde::Deserialize;

/// Marker the dataset uses for a missing value.
const NULL: &str = "NULL";

/// A row of `lines.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineRecord {
    pub line: u32,
    pub name: String,
    /// 6 hex digits, no `#`
    pub colour: String,
    /// 6 hex digits, or `NULL`/empty for none
    pub stripe: Option<String>,
}

impl LineRecord {
    /// The stripe colour, if one is given.
    pub fn stripe(&self) -> Option<&str> {
        self.stripe
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != NULL)
    }
}

/// A row of `stations.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    /// Map label, with `<br />` for line breaks. May be `NULL`.
    pub display_name: Option<String>,
    pub zone: f32,
    /// Number of lines the dataset claims serve this station
    pub total_lines: u32,
    /// 1 for a National Rail interchange, 0 otherwise
    pub rail: u8,
}

impl StationRecord {
    /// The map label, if one is given.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != NULL)
    }
}

/// A row of `routes.csv`: one line's link between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RouteRecord {
    pub station1: u32,
    pub station2: u32,
    pub line: u32,
}
