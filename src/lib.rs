//! Validated, immutable server configuration.

pub mod config;
pub mod observability;

pub use config::{Config, ConfigBuilder, ConfigError, ConfigResult, Field, LoadError};
