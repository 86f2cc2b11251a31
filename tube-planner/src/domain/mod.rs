//! Domain types for the tube route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data and planned routes. Types that can be invalid
//! (colours) enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod geo;
mod itinerary;
mod line;
mod route;
mod station;

pub use geo::{EARTH_RADIUS_KM, GeoPoint};
pub use itinerary::{Itinerary, RideSegment, Transfer};
pub use line::{Colour, InvalidColour, Line, LineId};
pub use route::{PathStep, total_cost};
pub use station::{Station, StationId};
