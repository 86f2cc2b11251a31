//! Station resolution error types.

use super::names::StationMatch;

/// A station name could not be resolved to a single station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Nothing matched; `suggestions` holds the closest spellings
    #[error("no station matches \"{query}\"")]
    NotFound {
        query: String,
        suggestions: Vec<StationMatch>,
    },

    /// Several stations matched equally well
    #[error("\"{query}\" matches {} stations", candidates.len())]
    Ambiguous {
        query: String,
        candidates: Vec<StationMatch>,
    },
}

impl ResolveError {
    /// The stations worth showing the user alongside the error.
    pub fn alternatives(&self) -> &[StationMatch] {
        match self {
            ResolveError::NotFound { suggestions, .. } => suggestions,
            ResolveError::Ambiguous { candidates, .. } => candidates,
        }
    }
}
