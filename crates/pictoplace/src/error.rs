//! Error types for positioning operations.
//!
//! Only structurally invalid calls are hard errors. A missing curated
//! placement is not an error at all; it selects the default path. Problems
//! loading placement tables or engine configuration are reported as
//! [`ConfigurationError`] to whoever performs the load.

use std::{io, path::PathBuf};

use thiserror::Error;

use pictoplace_core::diagram::Color;

/// The main error type for pictoplace operations.
#[derive(Debug, Error)]
pub enum PositioningError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// A required input was absent from a positioning request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("diagram has no letter assigned")]
    MissingLetter,

    #[error("{0} track is not present in the diagram")]
    MissingTrack(Color),

    #[error("{0} track has no motion")]
    MissingMotion(Color),
}

/// Placement tables or engine configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to parse placement JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid placement entry at `{path}`: {reason}")]
    InvalidEntry { path: String, reason: String },
}

impl ConfigurationError {
    /// Creates an [`ConfigurationError::InvalidEntry`] for a table key path.
    pub fn invalid_entry(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
