// explorer module
mod explorer;
// route module
mod route;
// traveler module
mod traveler;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::PathScraper;
pub use route::Route;
pub use traveler::{Checkpoint, Traveler, FOOD_FLOOR};
