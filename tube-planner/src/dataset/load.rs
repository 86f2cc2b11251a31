//! Reading the CSV files and turning them into a `Network`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::domain::{Colour, GeoPoint, Line, LineId, Station, StationId};
use crate::network::{Network, NetworkBuilder};

use super::error::DatasetError;
use super::records::{LineRecord, RouteRecord, StationRecord};

/// File name of the lines table.
pub const LINES_FILE: &str = "lines.csv";

/// File name of the stations table.
pub const STATIONS_FILE: &str = "stations.csv";

/// File name of the routes table.
pub const ROUTES_FILE: &str = "routes.csv";

/// Load the dataset in `dir` and build the network.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Network, DatasetError> {
    Dataset::read_dir(dir)?.into_network()
}

/// The three tables of the dataset, parsed but not yet validated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub lines: Vec<LineRecord>,
    pub stations: Vec<StationRecord>,
    pub routes: Vec<RouteRecord>,
}

impl Dataset {
    /// Read `lines.csv`, `stations.csv` and `routes.csv` from a directory.
    pub fn read_dir(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        let open = |name: &str| {
            let path = dir.join(name);
            File::open(&path).map_err(|source| DatasetError::Io { path, source })
        };

        let dataset = Self::from_readers(open(LINES_FILE)?, open(STATIONS_FILE)?, open(ROUTES_FILE)?)?;
        info!(
            dir = %dir.display(),
            lines = dataset.lines.len(),
            stations = dataset.stations.len(),
            routes = dataset.routes.len(),
            "read dataset"
        );
        Ok(dataset)
    }

    /// Parse the three tables from any readers.
    pub fn from_readers(
        lines: impl Read,
        stations: impl Read,
        routes: impl Read,
    ) -> Result<Self, DatasetError> {
        Ok(Self {
            lines: read_table(lines, LINES_FILE)?,
            stations: read_table(stations, STATIONS_FILE)?,
            routes: read_table(routes, ROUTES_FILE)?,
        })
    }

    /// Validate the records and build the network.
    pub fn into_network(self) -> Result<Network, DatasetError> {
        let mut builder = NetworkBuilder::new();

        for record in &self.lines {
            builder = builder.add_line(line_from_record(record)?);
        }
        for record in &self.stations {
            builder = builder.add_station(station_from_record(record)?);
        }
        for route in &self.routes {
            builder = builder.connect(
                StationId(route.station1),
                StationId(route.station2),
                LineId(route.line),
            );
        }

        let network = builder.build()?;
        check_line_counts(&network, &self.stations);
        Ok(network)
    }
}

fn read_table<T: DeserializeOwned>(reader: impl Read, file: &'static str) -> Result<Vec<T>, DatasetError> {
    let mut table = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = table
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DatasetError::Csv { file, source })?;
    debug!(file, rows = rows.len(), "parsed table");
    Ok(rows)
}

fn line_from_record(record: &LineRecord) -> Result<Line, DatasetError> {
    let invalid = |field: &'static str, message: String| DatasetError::InvalidField {
        record: format!("line {}", record.line),
        field,
        message,
    };

    let colour = Colour::parse(&record.colour).map_err(|e| invalid("colour", e.to_string()))?;
    let stripe = record
        .stripe()
        .map(Colour::parse)
        .transpose()
        .map_err(|e| invalid("stripe", e.to_string()))?;

    let mut line = Line::new(LineId(record.line), record.name.clone(), colour);
    line.stripe = stripe;
    Ok(line)
}

fn station_from_record(record: &StationRecord) -> Result<Station, DatasetError> {
    let invalid = |field: &'static str, message: String| DatasetError::InvalidField {
        record: format!("station {} ({})", record.id, record.name),
        field,
        message,
    };

    if !(-90.0..=90.0).contains(&record.latitude) {
        return Err(invalid("latitude", format!("{} is out of range", record.latitude)));
    }
    if !(-180.0..=180.0).contains(&record.longitude) {
        return Err(invalid("longitude", format!("{} is out of range", record.longitude)));
    }

    let mut station = Station::new(
        StationId(record.id),
        record.name.clone(),
        GeoPoint::new(record.latitude, record.longitude),
    )
    .with_zone(record.zone)
    .with_rail(record.rail != 0);
    if let Some(display_name) = record.display_name() {
        station = station.with_display_name(display_name);
    }
    Ok(station)
}

/// Log stations whose declared line count disagrees with the routes.
fn check_line_counts(network: &Network, records: &[StationRecord]) {
    for record in records {
        let Some(station) = network.station(StationId(record.id)) else {
            continue;
        };
        if station.lines.len() != record.total_lines as usize {
            warn!(
                station = %station.name,
                declared = record.total_lines,
                found = station.lines.len(),
                "line count differs from routes"
            );
        }
    }
}
