//! Error types for geovista

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeovistaError {
    // Dataset errors
    #[error("Failed to parse dataset: {reason}")]
    DatasetParse { reason: String },

    #[error("Dataset contains no features")]
    EmptyDataset,

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeovistaError>;
