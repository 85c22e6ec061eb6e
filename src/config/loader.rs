//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{Config, RawConfig};
use crate::config::validation::ConfigError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config, LoadError> {
    // Parse into the raw form first so validation errors keep their type.
    let raw: RawConfig = toml::from_str(content)?;
    Ok(Config::try_from(raw)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<Config, LoadError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(
        path = %path.display(),
        address = %config.address(),
        port = config.port(),
        "Configuration loaded"
    );

    Ok(config)
}
