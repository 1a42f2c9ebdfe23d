use kite_color::ColorError;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::IntervalError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Interval error: {0}")]
    Interval(#[from] IntervalError),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid ratio in config: {0}")]
    Ratio(String),

    #[error("Invalid tuning: {0}")]
    Tuning(#[from] ColorError),
}
