//! Loading the network from CSV files.
//!
//! The dataset is three CSV files with headers, in one directory:
//!
//! - `lines.csv`: `line,name,colour,stripe`
//! - `stations.csv`: `id,latitude,longitude,name,display_name,zone,total_lines,rail`
//! - `routes.csv`: `station1,station2,line`
//!
//! Segment distances are computed from the station coordinates.

mod error;
mod load;
mod records;

pub use error::DatasetError;
pub use load::{Dataset, LINES_FILE, ROUTES_FILE, STATIONS_FILE, load_dir};
pub use records::{LineRecord, RouteRecord, StationRecord};
