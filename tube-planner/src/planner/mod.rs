//! Route planner using Dijkstra search.
//!
//! This module implements the core routing engine that answers:
//! "What is the cheapest way from this station to that one?"
//!
//! Cost is distance ridden plus a fixed penalty for each change of line.
//! The search yields a list of stations with the line used to reach each,
//! and the itinerary builder collapses that into rides.

mod config;
mod itinerary;
mod search;
mod weight;


pub use config::{ConfigError, RouteConfig};
pub use itinerary::build_itinerary;
pub use search::{Plan, Planner, RouteError, find_route, find_route_with};
pub use weight::{TransferPenalty, Weighting};
