// error module
pub mod error;
// tree module
mod tree;
// waypoint module
mod waypoint;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the mountain module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::WaypointError;
pub use tree::{height_of, Mountain, MountainNode};
pub use waypoint::{Obstacle, Supply, Waypoint};
