//! Configuration loading for npmgraph.
//!
//! The tool is driven by a small TOML file (by default `config.toml` in the
//! working directory) that locates the npm project to analyze:
//!
//! ```toml
//! [package]
//! path = "/path/to/my-app"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read from disk.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML or is missing required keys.
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration structure.
///
/// Loaded once at startup and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The `[package]` table locating the target project.
    pub package: PackageConfig,
}

/// The `[package]` table of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Filesystem path to the npm project's root directory.
    pub path: String,
}

impl Config {
    /// Loads the configuration from a TOML file on disk.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if its contents are not valid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use npmgraph::config::Config;
    ///
    /// let config = Config::from_toml_str("[package]\npath = \".\"").unwrap();
    /// assert_eq!(config.package.path, ".");
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Returns the configured project path.
    pub fn project_path(&self) -> PathBuf {
        PathBuf::from(&self.package.path)
    }
}
