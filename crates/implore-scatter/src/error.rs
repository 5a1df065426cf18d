//! Error types for implore-scatter
//!
//! Buffer generation never fails: missing datasets and missing metadata
//! fields are absorbed as empty output or placeholder text. The errors here
//! cover the boundaries where outside input is parsed:
//! - Distance metric names
//! - Style configuration (TOML / JSON)
//! - Projection construction
//! - Camera bookmarks

use thiserror::Error;

/// Main error type for scatter adapter operations
#[derive(Error, Debug)]
pub enum ScatterError {
    /// A distance metric name that is not part of the closed metric set
    #[error("Unknown distance metric: {name}")]
    UnknownDistanceMetric { name: String },

    /// Invalid style configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Projection could not be built from the given components
    #[error("Invalid projection: {message}")]
    InvalidProjection { message: String },

    /// Camera bookmark (de)serialization failed
    #[error("Camera definition JSON error: {0}")]
    CameraJson(#[from] serde_json::Error),

    /// Style TOML could not be parsed
    #[error("Style TOML parse error: {0}")]
    ConfigToml(#[from] toml::de::Error),

    /// Style TOML could not be written
    #[error("Style TOML write error: {0}")]
    ConfigTomlWrite(#[from] toml::ser::Error),
}

/// Result type alias for scatter adapter operations
pub type ScatterResult<T> = Result<T, ScatterError>;
