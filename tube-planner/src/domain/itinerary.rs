//! Itinerary types.
//!
//! An `Itinerary` is the displayable form of a route: one `RideSegment`
//! per stretch spent on a single line, with transfers between them.

use super::{LineId, StationId};

/// A continuous ride on one line.
///
/// `towards` is the first stop after boarding, which tells the rider
/// which direction to take. For a one-stop ride it equals `alight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideSegment {
    /// Station where the ride starts
    pub board: StationId,
    /// Line ridden
    pub line: LineId,
    /// Next stop after boarding
    pub towards: StationId,
    /// Final stop of this ride
    pub alight: StationId,
    /// Number of hops ridden on this line
    pub stops: usize,
}

impl RideSegment {
    /// Whether the ride is a single hop.
    pub fn is_single_stop(&self) -> bool {
        self.stops == 1
    }
}

/// A change of line between two consecutive rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Station where the change happens
    pub at: StationId,
    /// Line being left
    pub from: LineId,
    /// Line being joined
    pub to: LineId,
}

/// An ordered list of rides from origin to destination.
///
/// # Invariants
///
/// - Consecutive rides connect (`alight` of one = `board` of the next)
/// - Consecutive rides are on different lines
///
/// An empty itinerary means origin and destination are the same station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    rides: Vec<RideSegment>,
}

impl Itinerary {
    /// Wrap an already-collapsed list of rides.
    pub(crate) fn from_rides(rides: Vec<RideSegment>) -> Self {
        debug_assert!(
            rides
                .windows(2)
                .all(|w| w[0].alight == w[1].board && w[0].line != w[1].line),
            "rides must connect and change line"
        );
        Self { rides }
    }

    /// Returns the rides in order.
    pub fn rides(&self) -> &[RideSegment] {
        &self.rides
    }

    /// Returns true if there is nothing to ride.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Returns the number of rides.
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Returns the changes of line between consecutive rides.
    pub fn transfers(&self) -> impl Iterator<Item = Transfer> + '_ {
        self.rides.windows(2).map(|w| Transfer {
            at: w[1].board,
            from: w[0].line,
            to: w[1].line,
        })
    }

    /// Returns the number of line changes.
    pub fn change_count(&self) -> usize {
        self.rides.len().saturating_sub(1)
    }

    /// Returns the total number of hops across all rides.
    pub fn total_stops(&self) -> usize {
        self.rides.iter().map(|r| r.stops).sum()
    }

    /// Returns the first boarding station, if any.
    pub fn origin(&self) -> Option<StationId> {
        self.rides.first().map(|r| r.board)
    }

    /// Returns the final alighting station, if any.
    pub fn destination(&self) -> Option<StationId> {
        self.rides.last().map(|r| r.alight)
    }
}
