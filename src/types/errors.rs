use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort the run. Everything recoverable (bad archives,
/// unreadable logs, failed deletes) is degraded and logged instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Mods folder not found: {}", .0.display())]
    ModsDirNotFound(PathBuf),
    #[error("Minecraft folder not found! Please specify the mods path manually.")]
    AutoDetectFailed,
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
