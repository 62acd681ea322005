use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Waypoint loading error: {0}")]
    WaypointLoad(#[from] crate::waypoint_loader::WaypointLoaderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
