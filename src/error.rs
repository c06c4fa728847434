//! Error types for the farmstead library.
//!
//! This module provides custom error types using `thiserror`. Storage-layer
//! failures are carried verbatim so the presentation layer sees the original
//! constraint message; absence of a row is never an error and is expressed
//! as `Ok(None)` by the repositories.

use thiserror::Error;

/// Errors that can occur in the farmstead data layer.
#[derive(Error, Debug)]
pub enum FarmError {
    /// Database-related errors, including constraint violations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Connection pool errors
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before it reached storage
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Which field failed validation
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with FarmError
pub type Result<T> = std::result::Result<T, FarmError>;

impl From<anyhow::Error> for FarmError {
    fn from(err: anyhow::Error) -> Self {
        FarmError::Other(err.to_string())
    }
}
