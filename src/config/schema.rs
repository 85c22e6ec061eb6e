//! Configuration schema definitions.
//!
//! [`Config`] is the validated, immutable server configuration. It can only be
//! produced by [`ConfigBuilder::build`]; deserialization goes through
//! [`RawConfig`] and then the builder, so both paths enforce the same rules.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::builder::ConfigBuilder;
use crate::config::validation::ConfigError;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 100;
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    address: String,
    port: u16,
    encryption_enabled: bool,
    max_connections: u32,
    timeout_seconds: u32,
    logging_enabled: bool,
}

impl Config {
    /// Start a fresh builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub(crate) fn from_parts(
        address: String,
        port: u16,
        encryption_enabled: bool,
        max_connections: u32,
        timeout_seconds: u32,
        logging_enabled: bool,
    ) -> Self {
        Self {
            address,
            port,
            encryption_enabled,
            max_connections,
            timeout_seconds,
            logging_enabled,
        }
    }

    /// Host name or IP, stored as given.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn encryption_enabled(&self) -> bool {
        self.encryption_enabled
    }

    /// Maximum concurrent connections.
    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn timeout_seconds(&self) -> u32 {
        self.timeout_seconds
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server at {}:{} [Encryption: {}, MaxConnections: {}, Timeout: {}s, Logging: {}]",
            self.address,
            self.port,
            on_off(self.encryption_enabled),
            self.max_connections,
            self.timeout_seconds,
            on_off(self.logging_enabled),
        )
    }
}

/// Unvalidated configuration document as it appears in a config file.
///
/// Numeric fields are wide signed integers so out-of-range values reach the
/// builder and fail with a field-specific error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub address: Option<String>,
    pub port: Option<i64>,
    pub encryption_enabled: Option<bool>,
    pub max_connections: Option<i64>,
    pub timeout_seconds: Option<i64>,
    pub logging_enabled: Option<bool>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let mut builder = ConfigBuilder::new();
        if let Some(address) = raw.address {
            builder.address(address)?;
        }
        if let Some(port) = raw.port {
            builder.port(port)?;
        }
        if let Some(enabled) = raw.encryption_enabled {
            builder.encryption(enabled);
        }
        if let Some(max) = raw.max_connections {
            builder.max_connections(max)?;
        }
        if let Some(secs) = raw.timeout_seconds {
            builder.timeout(secs)?;
        }
        if let Some(enabled) = raw.logging_enabled {
            builder.logging(enabled);
        }
        builder.build()
    }
}
