//! Core error types for focuspulse-core.
//!
//! This module defines the error hierarchy using thiserror. Analytics
//! failures (undefined aggregates) are separated from loader failures
//! (unreadable files) so callers can tell missing data apart from bad data.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focuspulse-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Analytics errors (undefined aggregates)
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Input loading errors
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Analytics errors: aggregates that have no defined value for the input.
///
/// These are surfaced as `Err` rather than defaulted; a mean over zero
/// sessions or a progress ratio over a zero target sum is undefined, not 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A required record collection was empty
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Goal targets summed to zero, so the aggregate progress ratio is undefined
    #[error("Goal targets sum to zero; aggregate progress is undefined")]
    ZeroGoalTarget,
}

/// Input loading errors. Raised for file-level problems only; individual
/// malformed rows are skipped with a warning, never fatal.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Failed to read an input file
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column was absent from the header row
    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration directory could not be resolved or created
    #[error("Cannot resolve configuration directory: {0}")]
    DirUnavailable(String),

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
