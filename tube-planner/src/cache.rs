//! Caching layer for planned routes.
//!
//! A route depends only on the network, the weighting and the two endpoint
//! stations. The network and weighting are fixed for the life of the
//! server, so plans are cached by (origin, destination).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::StationId;
use crate::planner::{Plan, RouteError};

/// Cache key for plans: (origin, destination).
type RouteKey = (StationId, StationId);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache of successful route plans.
///
/// Failed searches are not cached.
#[derive(Clone)]
pub struct RouteCache {
    plans: MokaCache<RouteKey, Arc<Plan>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Get a cached plan.
    pub async fn get(&self, from: StationId, to: StationId) -> Option<Arc<Plan>> {
        self.plans.get(&(from, to)).await
    }

    /// Insert a plan into the cache.
    pub async fn insert(&self, from: StationId, to: StationId, plan: Arc<Plan>) {
        self.plans.insert((from, to), plan).await;
    }

    /// Return the cached plan, or run `plan` and cache its result on success.
    pub async fn get_or_plan<F>(
        &self,
        from: StationId,
        to: StationId,
        plan: F,
    ) -> Result<Arc<Plan>, RouteError>
    where
        F: FnOnce() -> Result<Plan, RouteError>,
    {
        if let Some(cached) = self.get(from, to).await {
            trace!(%from, %to, "route cache hit");
            return Ok(cached);
        }

        let planned = Arc::new(plan()?);
        self.insert(from, to, planned.clone()).await;
        Ok(planned)
    }

    /// Number of cached plans.
    ///
    /// Moka updates this lazily; call [`RouteCache::sync`] first for an
    /// exact count.
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    /// Apply pending cache maintenance.
    pub async fn sync(&self) {
        self.plans.run_pending_tasks().await;
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Colour, GeoPoint, Line, LineId, Station};
    use crate::network::Network;
    use crate::planner::{Planner, RouteConfig};
    use std::cell::Cell;

    fn network() -> Network {
        let station = |id| Station::new(StationId(id), format!("S{id}"), GeoPoint::new(51.5, -0.1));
        Network::builder()
            .add_line(Line::new(LineId(1), "One", Colour::from_rgb(1, 2, 3)))
            .add_station(station(1))
            .add_station(station(2))
            .add_station(station(3))
            .add_segment(StationId(1), StationId(2), LineId(1), 1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let network = network();
        let planner = Planner::new(&network, RouteConfig::default());
        let cache = RouteCache::new(&CacheConfig::default());
        let calls = Cell::new(0);

        for _ in 0..3 {
            let plan = cache
                .get_or_plan(StationId(1), StationId(2), || {
                    calls.set(calls.get() + 1);
                    planner.plan(StationId(1), StationId(2))
                })
                .await
                .unwrap();
            assert_eq!(plan.total_cost(), 1.0);
        }

        assert_eq!(calls.get(), 1);
        cache.sync().await;
        assert_eq!(cache.entry_count(), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let network = network();
        let planner = Planner::new(&network, RouteConfig::default());
        let cache = RouteCache::new(&CacheConfig::default());

        let err = cache
            .get_or_plan(StationId(1), StationId(3), || {
                planner.plan(StationId(1), StationId(3))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RouteError::NoRoute { .. }));
        assert!(cache.get(StationId(1), StationId(3)).await.is_none());
    }

    #[tokio::test]
    async fn direction_is_part_of_the_key() {
        let network = network();
        let planner = Planner::new(&network, RouteConfig::default());
        let cache = RouteCache::new(&CacheConfig::default());

        cache
            .get_or_plan(StationId(1), StationId(2), || {
                planner.plan(StationId(1), StationId(2))
            })
            .await
            .unwrap();

        assert!(cache.get(StationId(2), StationId(1)).await.is_none());

        cache.invalidate_all();
        assert!(cache.get(StationId(1), StationId(2)).await.is_none());
    }
}
