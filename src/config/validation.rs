//! Field validation and configuration errors.
//!
//! # Responsibilities
//! - Range and presence checks for individual fields
//! - Error type shared by the builder and the loader
//!
//! # Design Decisions
//! - Each check is a pure function: raw value → Result<validated value, ConfigError>
//! - Checks run when a value is supplied, not at build time
//! - Missing mandatory fields are a separate error kind, raised only by build()

use std::fmt;

use thiserror::Error;

/// Identifies a configuration field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Port,
    MaxConnections,
    TimeoutSeconds,
}

impl Field {
    /// Key used for this field in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::Port => "port",
            Field::MaxConnections => "max_connections",
            Field::TimeoutSeconds => "timeout_seconds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while assembling a [`Config`](crate::config::Config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A supplied value violates its field's constraint.
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: Field, reason: &'static str },

    /// A mandatory field was never supplied before build().
    #[error("{field} required")]
    InvalidState { field: Field },
}

impl ConfigError {
    /// The field that triggered the error.
    pub fn field(&self) -> Field {
        match self {
            ConfigError::InvalidArgument { field, .. } | ConfigError::InvalidState { field } => {
                *field
            }
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ConfigError::InvalidArgument { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ConfigError::InvalidState { .. })
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Address must contain at least one non-whitespace character.
pub fn validate_address(address: &str) -> ConfigResult<()> {
    if is_blank(address) {
        return Err(ConfigError::InvalidArgument {
            field: Field::Address,
            reason: "must not be blank",
        });
    }
    Ok(())
}

/// Port must lie in 1-65535.
pub fn validate_port(port: i64) -> ConfigResult<u16> {
    match u16::try_from(port) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidArgument {
            field: Field::Port,
            reason: "must be in range 1-65535",
        }),
    }
}

pub fn validate_max_connections(max_connections: i64) -> ConfigResult<u32> {
    positive(max_connections, Field::MaxConnections)
}

pub fn validate_timeout(timeout_seconds: i64) -> ConfigResult<u32> {
    positive(timeout_seconds, Field::TimeoutSeconds)
}

fn positive(value: i64, field: Field) -> ConfigResult<u32> {
    if value <= 0 {
        return Err(ConfigError::InvalidArgument {
            field,
            reason: "must be positive",
        });
    }
    u32::try_from(value).map_err(|_| ConfigError::InvalidArgument {
        field,
        reason: "is too large",
    })
}
