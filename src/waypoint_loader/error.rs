use thiserror::Error;

use crate::mountain::WaypointError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for loading waypoints from an input file.
#[derive(Error, Debug)]
pub enum WaypointLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a parsed line cannot become a waypoint.
    #[error("Line {line} of '{file}' does not describe a valid rest stop: {source}")]
    InvalidWaypoint {
        file: String,
        line: usize,
        source: WaypointError,
    },
}

/// Why a single input line was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line has no tokens at all.
    #[error("line has no rest stop label")]
    MissingLabel,
}
