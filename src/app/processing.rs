//! The three stages of a run: loading rest stops from the input file,
//! building the balanced mountain, and searching it for ways down.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::mountain::{Mountain, Waypoint};
use crate::path::{PathScraper, Traveler};
use crate::waypoint_loader;

/// Loads rest stops from `input_file`, reporting every skipped line on stderr.
///
/// # Errors
/// Returns `AppError::WaypointLoad` if the file cannot be read or a line cannot
/// become a waypoint.
pub fn load_waypoints(input_file: &str, quiet_mode: bool) -> Result<Vec<Waypoint>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading rest stops from file...");
    let loaded = waypoint_loader::load_waypoints_from_file(input_file)?;

    for skipped in &loaded.skipped {
        eprintln!(
            "Skipping line {} ({}): {:?}",
            skipped.line_number, skipped.reason, skipped.text
        );
        verbose_eprintln!(
            quiet_mode,
            "   Skipped line {}: {} ({:?})",
            skipped.line_number,
            skipped.reason,
            skipped.text
        );
    }
    verbose_println!(
        quiet_mode,
        "   => Read {} rest stop(s), skipped {} line(s).",
        loaded.waypoints.len(),
        loaded.skipped.len()
    );
    Ok(loaded.waypoints)
}

/// Inserts every waypoint into a fresh mountain, in order.
pub fn build_mountain(waypoints: Vec<Waypoint>, quiet_mode: bool) -> Mountain {
    verbose_println!(quiet_mode, "[STEP 2] Building the mountain...");
    let mut mountain = Mountain::new();
    for waypoint in waypoints {
        let label = waypoint.label().to_string();
        if !mountain.insert(waypoint) {
            verbose_println!(quiet_mode, "   Duplicate rest stop '{}' ignored.", label);
        }
    }
    verbose_println!(
        quiet_mode,
        "   => {} rest stop(s), height {}.",
        mountain.len(),
        mountain.height()
    );
    mountain
}

/// Writes the mountain layout to the details log. Failures are logged and otherwise ignored.
pub fn log_mountain_details(mountain: &Mountain, details_writer: &mut BufWriter<File>, quiet_mode: bool) {
    if let Err(e) = mountain.write_details(details_writer) {
        verbose_eprintln!(quiet_mode, "   [ERROR] Failed to write mountain details: {}", e);
    }
}

/// Searches the mountain and writes each way down to `output`.
///
/// Returns the number of paths written.
pub fn report_paths(
    mountain: &Mountain,
    traveler: Traveler,
    output: &mut dyn Write,
    quiet_mode: bool,
) -> Result<usize, AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 3] Searching for ways down ({} edge(s), starting with food {}, axes {}, rafts {})...",
        PathScraper::required_edges(mountain),
        traveler.food(),
        traveler.axes(),
        traveler.rafts()
    );
    let count = PathScraper::print_paths_to_writer(mountain, traveler, output)?;
    output.flush()?;
    verbose_println!(quiet_mode, "   => Found {} path(s).", count);
    Ok(count)
}
