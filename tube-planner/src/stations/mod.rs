//! Station name resolution.
//!
//! Turns what a user typed into a station id before the planner runs.
//! Matching is exact first, then ignoring case and punctuation, then by
//! substring; misses come back with spelling suggestions.

mod error;
mod names;

pub use error::ResolveError;
pub use names::{StationIndex, StationMatch, normalize};
