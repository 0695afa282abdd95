use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Unknown direction `{token}` at position {position} (expected advance or retreat)")]
    UnknownDirection { token: String, position: usize },
    #[error("Unknown direction `{0}` (expected advance or retreat)")]
    InvalidDirection(String),
    #[error("Unknown output format `{0}` (expected text or json)")]
    UnknownFormat(String),
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to read .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

pub type Result<T, E = LifecycleError> = std::result::Result<T, E>;
