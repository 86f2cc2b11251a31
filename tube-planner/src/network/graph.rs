//! Network graph and its builder.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Line, LineId, Station, StationId};

use super::error::DataIntegrityError;

/// One line's link between two adjacent stations.
///
/// Segments are undirected; `a` and `b` are in declaration order only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: StationId,
    pub b: StationId,
    pub line: LineId,
    pub distance_km: f64,
}

impl Segment {
    /// Returns the end of the segment that is not `from`.
    fn other_end(&self, from: StationId) -> StationId {
        if self.a == from { self.b } else { self.a }
    }
}

/// A segment seen from one of its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub neighbor: StationId,
    pub line: LineId,
    pub distance_km: f64,
}

/// A validated, immutable rail network.
///
/// Stations and segments live in arenas; each station keeps the indices
/// of its incident segments, so neighbour lookup is a hash lookup plus a
/// slice walk. The network never changes after `NetworkBuilder::build`
/// and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    segments: Vec<Segment>,
    /// Parallel to `stations`: indices into `segments`.
    adjacency: Vec<Vec<usize>>,
    station_index: HashMap<StationId, usize>,
    line_index: HashMap<LineId, usize>,
}

impl Network {
    /// Returns a builder for a new network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&i| &self.stations[i])
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.line_index.get(&id).map(|&i| &self.lines[i])
    }

    /// Returns true if the station is part of the network.
    pub fn contains(&self, id: StationId) -> bool {
        self.station_index.contains_key(&id)
    }

    /// All stations, in declaration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All segments, in declaration order (duplicates removed).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segments touching a station, seen from that station.
    ///
    /// Returns `None` if the station is not in the network.
    pub fn incident(&self, id: StationId) -> Option<impl Iterator<Item = Incident> + '_> {
        let idx = *self.station_index.get(&id)?;
        Some(self.adjacency[idx].iter().map(move |&seg| {
            let segment = &self.segments[seg];
            Incident {
                neighbor: segment.other_end(id),
                line: segment.line,
                distance_km: segment.distance_km,
            }
        }))
    }

    /// Name of a station, or its id if unknown.
    pub fn station_name(&self, id: StationId) -> String {
        self.station(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("station {id}"))
    }

    /// Name of a line, or its id if unknown.
    pub fn line_name(&self, id: LineId) -> String {
        self.line(id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| format!("line {id}"))
    }
}

/// How a pending segment gets its distance.
#[derive(Debug, Clone, Copy)]
enum Distance {
    Explicit(f64),
    FromCoordinates,
}

#[derive(Debug, Clone, Copy)]
struct PendingSegment {
    a: StationId,
    b: StationId,
    line: LineId,
    distance: Distance,
}

/// Builder for a `Network`.
///
/// Records are collected without checks; `build` validates everything at
/// once and either returns a complete network or the first problem found.
///
/// # Examples
///
/// ```
/// use tube_planner::domain::{Colour, GeoPoint, Line, LineId, Station, StationId};
/// use tube_planner::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .add_line(Line::new(LineId(1), "Bakerloo", Colour::parse("ab6612").unwrap()))
///     .add_station(Station::new(StationId(1), "Oxford Circus", GeoPoint::new(51.515, -0.1415)))
///     .add_station(Station::new(StationId(2), "Piccadilly Circus", GeoPoint::new(51.5098, -0.1342)))
///     .connect(StationId(1), StationId(2), LineId(1))
///     .build()
///     .unwrap();
///
/// assert_eq!(network.segment_count(), 1);
/// assert!(network.station(StationId(1)).unwrap().lines.contains(&LineId(1)));
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    lines: Vec<Line>,
    segments: Vec<PendingSegment>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn add_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    /// Add a line.
    pub fn add_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Add a segment with an explicit distance in kilometres.
    pub fn add_segment(mut self, a: StationId, b: StationId, line: LineId, distance_km: f64) -> Self {
        self.segments.push(PendingSegment {
            a,
            b,
            line,
            distance: Distance::Explicit(distance_km),
        });
        self
    }

    /// Add a segment whose distance is computed from the station coordinates.
    pub fn connect(mut self, a: StationId, b: StationId, line: LineId) -> Self {
        self.segments.push(PendingSegment {
            a,
            b,
            line,
            distance: Distance::FromCoordinates,
        });
        self
    }

    /// Validate the records and build the network.
    pub fn build(self) -> Result<Network, DataIntegrityError> {
        let mut station_index = HashMap::with_capacity(self.stations.len());
        for (i, station) in self.stations.iter().enumerate() {
            if station_index.insert(station.id, i).is_some() {
                return Err(DataIntegrityError::DuplicateStation(station.id));
            }
        }

        let mut line_index = HashMap::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            if line_index.insert(line.id, i).is_some() {
                return Err(DataIntegrityError::DuplicateLine(line.id));
            }
        }

        let mut stations = self.stations;
        let mut adjacency = vec![Vec::new(); stations.len()];
        let mut segments = Vec::with_capacity(self.segments.len());
        let mut seen: HashSet<(StationId, StationId, LineId)> = HashSet::new();

        for pending in self.segments {
            let PendingSegment { a, b, line, .. } = pending;

            if a == b {
                return Err(DataIntegrityError::SelfLoop { station: a, line });
            }
            let a_idx = *station_index
                .get(&a)
                .ok_or(DataIntegrityError::UnknownStation { station: a, line })?;
            let b_idx = *station_index
                .get(&b)
                .ok_or(DataIntegrityError::UnknownStation { station: b, line })?;
            if !line_index.contains_key(&line) {
                return Err(DataIntegrityError::UnknownLine {
                    from: a,
                    to: b,
                    line,
                });
            }

            let distance_km = match pending.distance {
                Distance::Explicit(d) => d,
                Distance::FromCoordinates => stations[a_idx]
                    .location
                    .distance_km(&stations[b_idx].location),
            };
            if !distance_km.is_finite() || distance_km < 0.0 {
                return Err(DataIntegrityError::NegativeDistance {
                    from: a,
                    to: b,
                    line,
                    distance: distance_km,
                });
            }

            let key = (a.min(b), a.max(b), line);
            if !seen.insert(key) {
                debug!(%a, %b, %line, "skipping duplicate segment");
                continue;
            }

            let seg = segments.len();
            segments.push(Segment {
                a,
                b,
                line,
                distance_km,
            });
            adjacency[a_idx].push(seg);
            adjacency[b_idx].push(seg);
        }

        for station in &mut stations {
            station.lines.clear();
        }
        for segment in &segments {
            stations[station_index[&segment.a]].lines.insert(segment.line);
            stations[station_index[&segment.b]].lines.insert(segment.line);
        }

        debug!(
            stations = stations.len(),
            lines = self.lines.len(),
            segments = segments.len(),
            "built network"
        );

        Ok(Network {
            stations,
            lines: self.lines,
            segments,
            adjacency,
            station_index,
            line_index,
        })
    }
}
