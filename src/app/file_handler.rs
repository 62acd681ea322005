//! File system helpers for the application: validating the input path and
//! opening the log and details writers.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that the input path exists and is a regular file, and returns it as `&str`.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing, is not a file, or is not valid UTF-8.
pub fn validate_input_file(input_path: &Path, quiet_mode: bool) -> Result<&str, AppError> {
    let problem = if !input_path.exists() {
        Some("does not exist")
    } else if !input_path.is_file() {
        Some("is not a file")
    } else {
        None
    };
    if let Some(problem) = problem {
        let error_msg = format!("{} {}", input_path.display(), problem);
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    input_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(input_path.display().to_string()))
}

/// Opens `file_path` for writing behind a `BufWriter`, creating or truncating it.
///
/// The writer is not flushed here; it flushes when dropped or when the caller asks.
pub fn open_truncating_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_missing_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(
            validate_input_file(&missing, true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_input_file(dir.path(), true),
            Err(AppError::InvalidPath(_))
        ));
    }

    #[test]
    fn accepts_regular_file_and_truncates_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content that should go").unwrap();
        assert!(validate_input_file(&path, true).is_ok());

        let mut writer = open_truncating_writer(&path).unwrap();
        writer.write_all(b"new").unwrap();
        writer.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
