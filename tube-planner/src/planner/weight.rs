//! Edge weighting.

use crate::domain::LineId;

use super::config::RouteConfig;

/// Cost of riding one segment.
///
/// `arrived_on` is the line used to reach the segment's start, or `None`
/// at the source station. Implementations must be pure and return a
/// non-negative cost; the search relies on both.
pub trait Weighting {
    /// Returns the cost of riding `line` for `distance_km`.
    fn cost(&self, arrived_on: Option<LineId>, line: LineId, distance_km: f64) -> f64;
}

impl<F> Weighting for F
where
    F: Fn(Option<LineId>, LineId, f64) -> f64,
{
    fn cost(&self, arrived_on: Option<LineId>, line: LineId, distance_km: f64) -> f64 {
        self(arrived_on, line, distance_km)
    }
}

/// Distance cost plus a fixed penalty for changing line.
///
/// ```
/// use tube_planner::domain::LineId;
/// use tube_planner::planner::{RouteConfig, TransferPenalty, Weighting};
///
/// let w = TransferPenalty::new(RouteConfig::new(1.0, 100.0).unwrap());
///
/// // First ride from the source: no penalty
/// assert_eq!(w.cost(None, LineId(1), 2.0), 2.0);
/// // Staying on the same line
/// assert_eq!(w.cost(Some(LineId(1)), LineId(1), 2.0), 2.0);
/// // Changing line
/// assert_eq!(w.cost(Some(LineId(1)), LineId(2), 2.0), 102.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransferPenalty {
    config: RouteConfig,
}

impl TransferPenalty {
    /// Create a weighting from validated constants.
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    /// Returns the constants in use.
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }
}

impl Weighting for TransferPenalty {
    fn cost(&self, arrived_on: Option<LineId>, line: LineId, distance_km: f64) -> f64 {
        let ride = self.config.distance_weight * distance_km;
        match arrived_on {
            Some(current) if current != line => ride + self.config.transfer_penalty,
            _ => ride,
        }
    }
}

impl From<RouteConfig> for TransferPenalty {
    fn from(config: RouteConfig) -> Self {
        Self::new(config)
    }
}
