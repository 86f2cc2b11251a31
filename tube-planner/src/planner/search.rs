//! Dijkstra route search.
//!
//! The cost of a segment depends on the line the rider arrived on, so the
//! search runs over (station, arrival line) states rather than bare
//! stations. Each state is settled once, with its predecessor and arrival
//! line recorded at that moment; the route is read back from those
//! records. The first settled state at the target is the cheapest way to
//! reach it on any line.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::{Itinerary, LineId, PathStep, StationId};
use crate::network::Network;

use super::config::RouteConfig;
use super::itinerary::build_itinerary;
use super::weight::{TransferPenalty, Weighting};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A station id is not part of the network
    #[error("station {0} is not in the network")]
    NotFound(StationId),

    /// Both stations exist but are not connected
    #[error("no route from station {from} to station {to}")]
    NoRoute { from: StationId, to: StationId },
}

/// Search state: a station together with the line used to reach it.
type StateKey = (StationId, Option<LineId>);

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest first
/// and, among equal costs, the one pushed first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cost: f64,
    seq: u64,
    state: StateKey,
    via: Option<StateKey>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Settlement record for one state.
#[derive(Debug, Clone, Copy)]
struct Settled {
    cost: f64,
    via: Option<StateKey>,
}

/// Find the cheapest route using the default weighting.
///
/// See [`find_route_with`].
pub fn find_route(
    network: &Network,
    source: StationId,
    target: StationId,
) -> Result<Vec<PathStep>, RouteError> {
    find_route_with(network, &TransferPenalty::default(), source, target)
}

/// Find the cheapest route from `source` to `target`.
///
/// Returns the stations visited in order, each with the line used to
/// arrive and the cumulative cost. The first step is `source` with no
/// line and zero cost; `source == target` gives that single step.
///
/// # Errors
///
/// - `NotFound` if either station is missing (source checked first)
/// - `NoRoute` if the target cannot be reached
pub fn find_route_with<W: Weighting + ?Sized>(
    network: &Network,
    weighting: &W,
    source: StationId,
    target: StationId,
) -> Result<Vec<PathStep>, RouteError> {
    if !network.contains(source) {
        return Err(RouteError::NotFound(source));
    }
    if !network.contains(target) {
        return Err(RouteError::NotFound(target));
    }

    let mut settled: HashMap<StateKey, Settled> = HashMap::new();
    let mut tentative: HashMap<StateKey, f64> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    let start = (source, None);
    tentative.insert(start, 0.0);
    frontier.push(FrontierEntry {
        cost: 0.0,
        seq,
        state: start,
        via: None,
    });

    while let Some(entry) = frontier.pop() {
        match settled.entry(entry.state) {
            Entry::Occupied(_) => continue,
            Entry::Vacant(slot) => {
                slot.insert(Settled {
                    cost: entry.cost,
                    via: entry.via,
                });
            }
        }

        let (station, arrived_on) = entry.state;
        trace!(%station, ?arrived_on, cost = entry.cost, "settled");

        if station == target {
            let steps = reconstruct(&settled, entry.state);
            debug!(
                %source,
                %target,
                cost = entry.cost,
                settled = settled.len(),
                hops = steps.len() - 1,
                "found route"
            );
            return Ok(steps);
        }

        // The station was checked on entry, so this is always Some
        let Some(incident) = network.incident(station) else {
            continue;
        };

        for edge in incident {
            let next = (edge.neighbor, Some(edge.line));
            if settled.contains_key(&next) {
                continue;
            }

            let step = weighting.cost(arrived_on, edge.line, edge.distance_km);
            debug_assert!(step >= 0.0, "weighting returned negative cost {step}");
            let cost = entry.cost + step;

            let better = tentative.get(&next).is_none_or(|&known| cost < known);
            if better {
                tentative.insert(next, cost);
                seq += 1;
                frontier.push(FrontierEntry {
                    cost,
                    seq,
                    state: next,
                    via: Some(entry.state),
                });
            }
        }
    }

    debug!(%source, %target, settled = settled.len(), "no route");
    Err(RouteError::NoRoute {
        from: source,
        to: target,
    })
}

/// Walk predecessor records back from `end` and return the route in order.
fn reconstruct(settled: &HashMap<StateKey, Settled>, end: StateKey) -> Vec<PathStep> {
    let mut steps = Vec::new();
    let mut current = Some(end);

    while let Some(state) = current {
        let record = settled[&state];
        let (station, line) = state;
        steps.push(PathStep {
            station,
            line,
            cost: record.cost,
        });
        current = record.via;
    }

    steps.reverse();
    steps
}

/// A found route together with its itinerary.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Stations visited, in order.
    pub steps: Vec<PathStep>,

    /// Rides collapsed from `steps`.
    pub itinerary: Itinerary,
}

impl Plan {
    /// Total cost of the route.
    pub fn total_cost(&self) -> f64 {
        crate::domain::total_cost(&self.steps)
    }

    /// Origin station.
    pub fn origin(&self) -> StationId {
        self.steps[0].station
    }

    /// Destination station.
    pub fn destination(&self) -> StationId {
        self.steps[self.steps.len() - 1].station
    }
}

/// Route planner over a fixed network.
///
/// Holds a borrowed network and a weighting; queries do not mutate either,
/// so one planner can serve any number of queries.
pub struct Planner<'a, W: Weighting = TransferPenalty> {
    network: &'a Network,
    weighting: W,
}

impl<'a> Planner<'a, TransferPenalty> {
    /// Create a planner with the stock distance + transfer weighting.
    pub fn new(network: &'a Network, config: RouteConfig) -> Self {
        Self {
            network,
            weighting: TransferPenalty::new(config),
        }
    }
}

impl<'a, W: Weighting> Planner<'a, W> {
    /// Create a planner with a custom weighting.
    pub fn with_weighting(network: &'a Network, weighting: W) -> Self {
        Self { network, weighting }
    }

    /// Returns the network being searched.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Find the cheapest route between two stations.
    pub fn find_route(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<Vec<PathStep>, RouteError> {
        find_route_with(self.network, &self.weighting, source, target)
    }

    /// Find the cheapest route and build its itinerary.
    pub fn plan(&self, source: StationId, target: StationId) -> Result<Plan, RouteError> {
        let steps = self.find_route(source, target)?;
        let itinerary = build_itinerary(&steps);
        Ok(Plan { steps, itinerary })
    }
}
