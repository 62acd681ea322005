//! Main application orchestrator.
//!
//! Coordinates one run:
//! 1. Initializes logging (unless quiet).
//! 2. Validates the input file.
//! 3. Loads rest stops, skipping malformed lines.
//! 4. Builds the balanced mountain and dumps it to the details log.
//! 5. Prints every way down to stdout.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path::Traveler;
use std::io::Write; // For BufWriter::flush

/// Runs the application for the parsed command line.
///
/// # Errors
/// Returns `AppError` if the input is missing or unreadable, or if stdout cannot be written.
/// A search that finds nothing is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", cli.log_file.display());
        }
    }

    let result = run_stages(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of {}: {}", cli.log_file.display(), e);
        }
    }
    result
}

fn run_stages(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let input_file = file_handler::validate_input_file(&cli.input, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing File: {}", cli.input.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let waypoints = processing::load_waypoints(input_file, quiet_mode)?;
    let mountain = processing::build_mountain(waypoints, quiet_mode);

    if !quiet_mode {
        match file_handler::open_truncating_writer(&cli.details_file) {
            Ok(mut details_writer) => {
                processing::log_mountain_details(&mountain, &mut details_writer, quiet_mode);
                if let Err(e) = details_writer.flush() {
                    verbose_eprintln!(
                        quiet_mode,
                        "[WARNING] Failed to flush mountain details ({}): {}",
                        cli.details_file.display(),
                        e
                    );
                }
            }
            Err(e) => {
                verbose_eprintln!(
                    quiet_mode,
                    "[WARNING] Failed to open mountain details ({}): {}. Details will not be logged.",
                    cli.details_file.display(),
                    e
                );
            }
        }
    }

    let traveler = Traveler::with_supplies(
        i32::from(cli.food),
        i32::from(cli.axes),
        i32::from(cli.rafts),
    );
    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    processing::report_paths(&mountain, traveler, &mut output, quiet_mode)?;
    Ok(())
}
