//! Web layer for the tube planner.
//!
//! Provides HTTP endpoints for station search and route planning.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
