//! Error types for the simulation engine and its persistence layer.

use thiserror::Error;

/// Errors returned by engine, persistence and scenario operations.
///
/// None of these is fatal: the engine state stays usable after any of them.
#[derive(Debug, Error)]
pub enum SimError {
    /// Non-positive mass, wrong-length vector, malformed numeric field
    #[error("Validation error: {0}")]
    Validation(String),

    /// A body with this id is already registered
    #[error("A body with id '{0}' already exists")]
    DuplicateId(String),

    /// Format name other than `json` / `csv`
    #[error("Unsupported file format '{0}', use 'json' or 'csv'")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Scenario error: {0}")]
    Scenario(#[from] serde_yaml::Error),
}

impl SimError {
    /// Creates a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
