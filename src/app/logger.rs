use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::File;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

use super::file_handler;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if missing and truncated if it exists, so each run starts fresh.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let writer = file_handler::open_truncating_writer(log_file_path)?;
    match LOGGER.lock() {
        Ok(mut logger_guard) => {
            *logger_guard = Some(writer);
            Ok(())
        }
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_line("ERROR: ", args);
}

fn write_line(prefix: &str, args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        // Not initialized: verbose output is suppressed.
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                eprintln!("Fallback (log write failed) {}{}", prefix, args);
            }
        }
    } else {
        eprintln!("Fallback (logger mutex error) {}{}", prefix, args);
    }
}

/// Flushes buffered log lines to disk. A no-op if the logger was never initialized.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}
