//! Collapse a route into rides.

use crate::domain::{Itinerary, PathStep, RideSegment};

/// Build the itinerary for a route.
///
/// Consecutive hops on the same line become one `RideSegment`; a new ride
/// starts wherever the arrival line changes. A route of zero or one step
/// (source equals target) gives an empty itinerary.
///
/// Steps after the first are expected to carry a line; any that don't are
/// skipped.
///
/// # Examples
///
/// ```
/// use tube_planner::domain::{LineId, PathStep, StationId};
/// use tube_planner::planner::build_itinerary;
///
/// let steps = [
///     PathStep::origin(StationId(1)),
///     PathStep::arrive(StationId(2), LineId(1), 1.0),
///     PathStep::arrive(StationId(3), LineId(1), 2.0),
///     PathStep::arrive(StationId(4), LineId(2), 8.0),
/// ];
///
/// let itinerary = build_itinerary(&steps);
/// assert_eq!(itinerary.len(), 2);
/// assert_eq!(itinerary.rides()[0].towards, StationId(2));
/// assert_eq!(itinerary.rides()[0].alight, StationId(3));
/// assert_eq!(itinerary.rides()[0].stops, 2);
/// assert_eq!(itinerary.rides()[1].board, StationId(3));
/// ```
pub fn build_itinerary(steps: &[PathStep]) -> Itinerary {
    let mut rides: Vec<RideSegment> = Vec::new();
    let mut open: Option<RideSegment> = None;

    for pair in steps.windows(2) {
        let (prev, step) = (&pair[0], &pair[1]);
        let Some(line) = step.line else {
            continue;
        };

        if let Some(ride) = open.as_mut().filter(|r| r.line == line) {
            ride.stops += 1;
            ride.alight = step.station;
            continue;
        }

        rides.extend(open.take());
        open = Some(RideSegment {
            board: prev.station,
            line,
            towards: step.station,
            alight: step.station,
            stops: 1,
        });
    }

    rides.extend(open);
    Itinerary::from_rides(rides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId, Transfer};

    /// Steps from (station, line) pairs; the first pair's line is ignored.
    fn steps(path: &[(u32, u32)]) -> Vec<PathStep> {
        path.iter()
            .enumerate()
            .map(|(i, &(station, line))| {
                if i == 0 {
                    PathStep::origin(StationId(station))
                } else {
                    PathStep::arrive(StationId(station), LineId(line), i as f64)
                }
            })
            .collect()
    }

    #[test]
    fn empty_and_trivial_routes() {
        assert!(build_itinerary(&[]).is_empty());
        assert!(build_itinerary(&steps(&[(1, 0)])).is_empty());
    }

    #[test]
    fn single_hop() {
        let it = build_itinerary(&steps(&[(1, 0), (2, 7)]));
        assert_eq!(
            it.rides(),
            &[RideSegment {
                board: StationId(1),
                line: LineId(7),
                towards: StationId(2),
                alight: StationId(2),
                stops: 1,
            }]
        );
        assert!(it.rides()[0].is_single_stop());
    }

    #[test]
    fn one_line_collapses_to_one_ride() {
        let it = build_itinerary(&steps(&[(1, 0), (2, 1), (3, 1), (4, 1)]));
        assert_eq!(it.len(), 1);
        let ride = it.rides()[0];
        assert_eq!(ride.board, StationId(1));
        assert_eq!(ride.towards, StationId(2));
        assert_eq!(ride.alight, StationId(4));
        assert_eq!(ride.stops, 3);
        assert_eq!(it.transfers().count(), 0);
    }

    #[test]
    fn one_change_gives_two_rides_and_one_transfer() {
        let it = build_itinerary(&steps(&[(1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));

        assert_eq!(it.len(), 2);
        assert_eq!(
            it.rides()[1],
            RideSegment {
                board: StationId(3),
                line: LineId(2),
                towards: StationId(4),
                alight: StationId(5),
                stops: 2,
            }
        );

        let transfers: Vec<_> = it.transfers().collect();
        assert_eq!(
            transfers,
            vec![Transfer {
                at: StationId(3),
                from: LineId(1),
                to: LineId(2),
            }]
        );
    }

    #[test]
    fn returning_to_a_line_opens_a_new_ride() {
        let it = build_itinerary(&steps(&[(1, 0), (2, 1), (3, 2), (4, 1)]));
        let lines: Vec<_> = it.rides().iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![LineId(1), LineId(2), LineId(1)]);
        assert_eq!(it.change_count(), 2);
        assert!(it.rides().iter().all(|r| r.stops == 1));
    }

    #[test]
    fn stop_counts_cover_every_hop() {
        let path = steps(&[(1, 0), (2, 3), (3, 3), (4, 1), (5, 2), (6, 2), (7, 2)]);
        let it = build_itinerary(&path);
        assert_eq!(it.total_stops(), path.len() - 1);
        assert_eq!(
            it.rides().iter().map(|r| r.stops).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn rides_connect() {
        let it = build_itinerary(&steps(&[(1, 0), (2, 3), (3, 4), (4, 4), (5, 3)]));
        for pair in it.rides().windows(2) {
            assert_eq!(pair[0].alight, pair[1].board);
        }
        assert_eq!(it.origin(), Some(StationId(1)));
        assert_eq!(it.destination(), Some(StationId(5)));
    }
}
