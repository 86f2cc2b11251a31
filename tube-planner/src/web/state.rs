//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::network::Network;
use crate::planner::RouteConfig;
use crate::stations::StationIndex;

/// Shared application state.
///
/// Contains everything a request handler needs. The network and station
/// index are read-only and shared between requests without locking.
#[derive(Clone)]
pub struct AppState {
    /// The network being planned over
    pub network: Arc<Network>,

    /// Name lookup over the network's stations
    pub stations: Arc<StationIndex>,

    /// Route weighting configuration
    pub config: RouteConfig,

    /// Planned routes by (origin, destination)
    pub routes: RouteCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: RouteConfig, cache_config: &CacheConfig) -> Self {
        let stations = StationIndex::new(&network);
        Self {
            network: Arc::new(network),
            stations: Arc::new(stations),
            config,
            routes: RouteCache::new(cache_config),
        }
    }
}
