//! Fluent builder for [`Config`].
//!
//! Every setter validates its input on the spot and leaves the builder
//! untouched when it fails. `address` and `port` have no defaults; their
//! presence is checked once, by [`ConfigBuilder::build`].
//!
//! ```
//! use server_config::Config;
//!
//! # fn main() -> Result<(), server_config::ConfigError> {
//! let config = Config::builder()
//!     .address("10.0.0.5")?
//!     .port(8443)?
//!     .enable_encryption()
//!     .max_connections(500)?
//!     .timeout(15)?
//!     .build()?;
//! assert_eq!(config.port(), 8443);
//! # Ok(())
//! # }
//! ```
//!
//! The builder is mutated through `&mut self`; sharing one across threads
//! requires the caller to wrap it in a lock.

use crate::config::schema::{Config, DEFAULT_MAX_CONNECTIONS, DEFAULT_TIMEOUT_SECS};
use crate::config::validation::{
    is_blank, validate_address, validate_max_connections, validate_port, validate_timeout,
    ConfigError, ConfigResult, Field,
};

/// Accumulates configuration values before producing a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBuilder {
    address: Option<String>,
    port: Option<u16>,
    encryption_enabled: bool,
    max_connections: u32,
    timeout_seconds: u32,
    logging_enabled: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            address: None,
            port: None,
            encryption_enabled: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            logging_enabled: false,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server address. Fails on blank input.
    pub fn address(&mut self, address: impl Into<String>) -> ConfigResult<&mut Self> {
        let address = address.into();
        validate_address(&address)?;
        self.address = Some(address);
        Ok(self)
    }

    /// Set the listening port. Fails outside 1-65535.
    pub fn port(&mut self, port: i64) -> ConfigResult<&mut Self> {
        self.port = Some(validate_port(port)?);
        Ok(self)
    }

    pub fn encryption(&mut self, enabled: bool) -> &mut Self {
        self.encryption_enabled = enabled;
        self
    }

    /// Shorthand for `encryption(true)`.
    pub fn enable_encryption(&mut self) -> &mut Self {
        self.encryption(true)
    }

    /// Set the connection limit. Fails unless positive.
    pub fn max_connections(&mut self, max_connections: i64) -> ConfigResult<&mut Self> {
        self.max_connections = validate_max_connections(max_connections)?;
        Ok(self)
    }

    /// Set the timeout in seconds. Fails unless positive.
    pub fn timeout(&mut self, timeout_seconds: i64) -> ConfigResult<&mut Self> {
        self.timeout_seconds = validate_timeout(timeout_seconds)?;
        Ok(self)
    }

    pub fn logging(&mut self, enabled: bool) -> &mut Self {
        self.logging_enabled = enabled;
        self
    }

    /// Shorthand for `logging(true)`.
    pub fn enable_logging(&mut self) -> &mut Self {
        self.logging(true)
    }

    /// Produce a [`Config`] from the current state.
    ///
    /// The builder is left as is and may be reused.
    pub fn build(&self) -> ConfigResult<Config> {
        let address = match &self.address {
            Some(address) if !is_blank(address) => address.clone(),
            _ => return Err(ConfigError::InvalidState { field: Field::Address }),
        };
        let port = self
            .port
            .ok_or(ConfigError::InvalidState { field: Field::Port })?;

        Ok(Config::from_parts(
            address,
            port,
            self.encryption_enabled,
            self.max_connections,
            self.timeout_seconds,
            self.logging_enabled,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new()
            .address("127.0.0.1")
            .unwrap()
            .port(8080)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.address(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert!(!config.encryption_enabled());
        assert_eq!(config.max_connections(), 100);
        assert_eq!(config.timeout_seconds(), 30);
        assert!(!config.logging_enabled());
    }

    #[test]
    fn test_failed_setter_leaves_state() {
        let mut builder = ConfigBuilder::new();
        builder.port(9000).unwrap();
        let before = builder.clone();

        assert!(builder.port(0).is_err());
        assert!(builder.port(65536).is_err());
        assert!(builder.address("   ").is_err());
        assert!(builder.max_connections(-1).is_err());
        assert!(builder.timeout(0).is_err());
        assert_eq!(builder, before);
    }

    #[test]
    fn test_build_requires_address_then_port() {
        let err = ConfigBuilder::new().build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidState { field: Field::Address });

        let err = ConfigBuilder::new().port(80).unwrap().build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidState { field: Field::Address });

        let err = ConfigBuilder::new()
            .address("host")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidState { field: Field::Port });
        assert_eq!(err.to_string(), "port required");
    }

    #[test]
    fn test_flag_shortcuts_and_overrides() {
        let mut builder = ConfigBuilder::new();
        builder.address("h").unwrap().port(1).unwrap();

        builder.enable_encryption().enable_logging();
        let config = builder.build().unwrap();
        assert!(config.encryption_enabled());
        assert!(config.logging_enabled());

        builder.encryption(false).logging(false);
        let config = builder.build().unwrap();
        assert!(!config.encryption_enabled());
        assert!(!config.logging_enabled());
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = ConfigBuilder::new();
        builder.address("a.example").unwrap().port(1000).unwrap();
        let first = builder.build().unwrap();

        builder.port(2000).unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first.port(), 1000);
        assert_eq!(second.port(), 2000);
        assert_eq!(first.address(), second.address());
    }
}
