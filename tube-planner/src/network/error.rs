//! Network construction errors.

use crate::domain::{LineId, StationId};

/// The input records do not describe a valid network.
///
/// Construction stops at the first problem found; no partial network is
/// returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataIntegrityError {
    /// Two stations were declared with the same id
    #[error("station {0} is declared more than once")]
    DuplicateStation(StationId),

    /// Two lines were declared with the same id
    #[error("line {0} is declared more than once")]
    DuplicateLine(LineId),

    /// A segment names a station that was never declared
    #[error("segment on line {line} references unknown station {station}")]
    UnknownStation { station: StationId, line: LineId },

    /// A segment names a line that was never declared
    #[error("segment {from}-{to} references unknown line {line}")]
    UnknownLine {
        from: StationId,
        to: StationId,
        line: LineId,
    },

    /// A segment distance is negative or not a number
    #[error("segment {from}-{to} on line {line} has invalid distance {distance}")]
    NegativeDistance {
        from: StationId,
        to: StationId,
        line: LineId,
        distance: f64,
    },

    /// A segment starts and ends at the same station
    #[error("segment on line {line} joins station {station} to itself")]
    SelfLoop { station: StationId, line: LineId },
}
