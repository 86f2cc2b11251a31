//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, RideSegment, StationId, Transfer};
use crate::network::Network;
use crate::planner::Plan;
use crate::stations::StationMatch;

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search query
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    /// Station id
    pub id: u32,

    /// Station name
    pub name: String,

    /// Fare zone
    pub zone: f32,

    /// Names of the lines serving the station
    pub lines: Vec<String>,
}

impl StationSearchResult {
    /// Look up a matched station's details.
    pub fn from_match(network: &Network, m: &StationMatch) -> Self {
        let station = network.station(m.id);
        Self {
            id: m.id.0,
            name: m.name.clone(),
            zone: station.map_or(0.0, |s| s.zone),
            lines: station
                .map(|s| s.lines.iter().map(|&l| network.line_name(l)).collect())
                .unwrap_or_default(),
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// A station reference in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRef {
    pub id: u32,
    pub name: String,
}

impl StationRef {
    pub fn new(network: &Network, id: StationId) -> Self {
        Self {
            id: id.0,
            name: network.station_name(id),
        }
    }
}

impl From<&StationMatch> for StationRef {
    fn from(m: &StationMatch) -> Self {
        Self {
            id: m.id.0,
            name: m.name.clone(),
        }
    }
}

/// A line reference in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRef {
    pub id: u32,
    pub name: String,

    /// Map colour as `#rrggbb`
    pub colour: Option<String>,
}

impl LineRef {
    pub fn new(network: &Network, id: LineId) -> Self {
        Self {
            id: id.0,
            name: network.line_name(id),
            colour: network.line(id).map(|l| l.colour.to_string()),
        }
    }
}

/// One ride in a planned route.
#[derive(Debug, Serialize)]
pub struct RideResult {
    pub line: LineRef,
    pub board: StationRef,
    pub towards: StationRef,
    pub alight: StationRef,
    pub stops: usize,
}

impl RideResult {
    pub fn from_ride(network: &Network, ride: &RideSegment) -> Self {
        Self {
            line: LineRef::new(network, ride.line),
            board: StationRef::new(network, ride.board),
            towards: StationRef::new(network, ride.towards),
            alight: StationRef::new(network, ride.alight),
            stops: ride.stops,
        }
    }
}

/// A change of line in a planned route.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    pub at: StationRef,
    pub from_line: LineRef,
    pub to_line: LineRef,
}

impl TransferResult {
    pub fn from_transfer(network: &Network, transfer: &Transfer) -> Self {
        Self {
            at: StationRef::new(network, transfer.at),
            from_line: LineRef::new(network, transfer.from),
            to_line: LineRef::new(network, transfer.to),
        }
    }
}

/// Response for a planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: StationRef,
    pub to: StationRef,
    pub total_cost: f64,
    pub rides: Vec<RideResult>,
    pub transfers: Vec<TransferResult>,
}

impl RouteResponse {
    pub fn from_plan(network: &Network, plan: &Plan) -> Self {
        Self {
            from: StationRef::new(network, plan.origin()),
            to: StationRef::new(network, plan.destination()),
            total_cost: plan.total_cost(),
            rides: plan
                .itinerary
                .rides()
                .iter()
                .map(|r| RideResult::from_ride(network, r))
                .collect(),
            transfers: plan
                .itinerary
                .transfers()
                .map(|t| TransferResult::from_transfer(network, &t))
                .collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Stations the caller may have meant
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<StationRef>,
}
