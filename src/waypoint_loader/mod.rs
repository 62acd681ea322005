// error module
pub mod error;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the waypoint_loader module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{LineError, WaypointLoaderError};
pub use loader::{load_waypoints_from_file, parse_line, parse_waypoints, LoadedWaypoints, ParsedLine, SkippedLine};
