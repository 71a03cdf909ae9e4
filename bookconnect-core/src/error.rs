//! Catalog error types with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the catalog core
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Invalid start-up configuration (for example a zero page size)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No book with the requested id exists in the dataset
    #[error("No book with id '{id}' exists in the catalog")]
    NotFound { id: String },

    /// The dataset violates a data-model invariant
    #[error("Dataset integrity error: {0}")]
    Integrity(String),

    /// Failed to read a dataset file
    #[error("Failed to read dataset from {path}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a configuration file
    #[error("Failed to read configuration from {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme name other than `day` or `night`
    #[error("Unknown theme '{0}' (expected 'day' or 'night')")]
    UnknownTheme(String),
}

impl CatalogError {
    /// Whether the error is an expected, recoverable condition
    ///
    /// Lookup misses are triggered by stale card ids and must never abort
    /// the caller; everything else is a start-up failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
