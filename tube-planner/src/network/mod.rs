//! The rail network as an undirected multigraph.
//!
//! Stations are nodes and each line's link between two adjacent stations
//! is its own edge, so a pair served by two lines has two parallel edges
//! with their own line and distance.

mod error;
mod graph;

pub use error::DataIntegrityError;
pub use graph::{Incident, Network, NetworkBuilder, Segment};
