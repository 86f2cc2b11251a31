//! Raw search output.

use super::{LineId, StationId};

/// One station on a found route.
///
/// `line` is the line ridden to arrive here; it is `None` only for the
/// first step (the source station). `cost` is cumulative from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
    pub station: StationId,
    pub line: Option<LineId>,
    pub cost: f64,
}

impl PathStep {
    /// The source step of a route.
    pub fn origin(station: StationId) -> Self {
        Self {
            station,
            line: None,
            cost: 0.0,
        }
    }

    /// A step reached by riding `line`.
    pub fn arrive(station: StationId, line: LineId, cost: f64) -> Self {
        Self {
            station,
            line: Some(line),
            cost,
        }
    }
}

/// Total cost of a route: the cumulative cost of its last step.
///
/// An empty slice costs nothing.
pub fn total_cost(steps: &[PathStep]) -> f64 {
    steps.last().map_or(0.0, |s| s.cost)
}
