//! London Underground route planner.
//!
//! Loads the tube network from CSV, finds the cheapest route between two
//! stations (distance plus a penalty per change of line) and describes it
//! as a list of rides. Usable as a library, a command-line tool, or an
//! HTTP service.

pub mod cache;
pub mod dataset;
pub mod domain;
pub mod network;
pub mod planner;
pub mod render;
pub mod stations;
pub mod web;
