use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config '{path}': {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Invalid config field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

/// Rejections raised before any scoring runs. The field path points at the
/// first offending value, e.g. `garments[1].glossIndex`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Malformed outfit features: {0}")]
    Malformed(String),

    #[error("Outfit must contain at least one garment")]
    NoGarments,

    #[error("Field '{0}' must not be empty")]
    EmptyField(String),

    #[error("Field '{field}' is not a finite number")]
    NonFinite { field: String },

    #[error("Field '{field}' = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type StyleResult<T> = Result<T, StyleError>;
