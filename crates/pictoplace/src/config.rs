//! Configuration types for the positioning engine.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field falls back to its default when absent.
//!
//! # Overview
//!
//! - [`EngineConfig`] - Top-level configuration.
//! - [`BetaConfig`] - Separation magnitudes applied when props coincide.
//! - [`AdjustmentConfig`] - Controls how table adjustments are applied.
//!
//! # Example
//!
//! ```
//! # use pictoplace::config::EngineConfig;
//! let config = EngineConfig::from_toml_str("[beta]\nlarge_offset = 60.0\n").unwrap();
//! assert_eq!(config.beta().large_offset(), 60.0);
//! assert_eq!(config.beta().small_offset(), 25.0);
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use pictoplace_core::prop::PropCategory;

use crate::error::ConfigurationError;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Beta separation section.
    #[serde(default)]
    beta: BetaConfig,

    /// Adjustment section.
    #[serde(default)]
    adjustment: AdjustmentConfig,
}

impl EngineConfig {
    /// Creates a new [`EngineConfig`] from its sections.
    pub fn new(beta: BetaConfig, adjustment: AdjustmentConfig) -> Self {
        Self { beta, adjustment }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Toml`] if the text is not valid TOML or
    /// does not match the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the beta separation configuration.
    pub fn beta(&self) -> &BetaConfig {
        &self.beta
    }

    /// Returns the adjustment configuration.
    pub fn adjustment(&self) -> &AdjustmentConfig {
        &self.adjustment
    }
}

/// Separation magnitudes per prop size class, in canvas units.
#[derive(Debug, Clone, Deserialize)]
pub struct BetaConfig {
    #[serde(default = "default_small_offset")]
    small_offset: f32,

    #[serde(default = "default_medium_offset")]
    medium_offset: f32,

    #[serde(default = "default_large_offset")]
    large_offset: f32,
}

fn default_small_offset() -> f32 {
    25.0
}

fn default_medium_offset() -> f32 {
    35.0
}

fn default_large_offset() -> f32 {
    50.0
}

impl BetaConfig {
    /// Creates a new [`BetaConfig`] with explicit magnitudes.
    pub fn new(small_offset: f32, medium_offset: f32, large_offset: f32) -> Self {
        Self {
            small_offset,
            medium_offset,
            large_offset,
        }
    }

    pub fn small_offset(&self) -> f32 {
        self.small_offset
    }

    pub fn medium_offset(&self) -> f32 {
        self.medium_offset
    }

    pub fn large_offset(&self) -> f32 {
        self.large_offset
    }

    /// Returns the separation magnitude for a prop size class.
    pub fn magnitude(&self, category: PropCategory) -> f32 {
        match category {
            PropCategory::Small => self.small_offset,
            PropCategory::Medium => self.medium_offset,
            PropCategory::Large => self.large_offset,
        }
    }
}

impl Default for BetaConfig {
    fn default() -> Self {
        Self::new(
            default_small_offset(),
            default_medium_offset(),
            default_large_offset(),
        )
    }
}

/// Controls how table adjustments are turned into arrow offsets.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentConfig {
    /// Rotate adjustments into the arrow's quadrant before applying them.
    #[serde(default = "default_directional")]
    directional: bool,
}

fn default_directional() -> bool {
    true
}

impl AdjustmentConfig {
    pub fn new(directional: bool) -> Self {
        Self { directional }
    }

    /// Returns `true` if adjustments are mapped into the arrow's quadrant.
    pub fn directional(&self) -> bool {
        self.directional
    }
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self::new(default_directional())
    }
}

/// Load engine configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigurationError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading engine configuration");

    if !path.exists() {
        return Err(ConfigurationError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    EngineConfig::from_toml_str(&content)
}
