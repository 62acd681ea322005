use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for waypoint construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaypointError {
    /// Error when a waypoint is built without a label.
    #[error("Invalid waypoint: every rest stop needs a non-empty label")]
    InvalidWaypoint,
}
