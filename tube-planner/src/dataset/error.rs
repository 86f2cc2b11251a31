//! Dataset error types.

use std::path::PathBuf;

use crate::network::DataIntegrityError;

/// Errors that can occur when loading the network dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file is not valid CSV or a row does not match its header
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: &'static str,
        source: csv::Error,
    },

    /// A field parsed but holds an unusable value
    #[error("invalid {field} in {record}: {message}")]
    InvalidField {
        record: String,
        field: &'static str,
        message: String,
    },

    /// The records do not form a valid network
    #[error("inconsistent dataset: {0}")]
    Integrity(#[from] DataIntegrityError),
}
