//! Server configuration subsystem.
//!
//! # Data Flow
//! ```text
//! caller code                 config file (TOML)
//!     │                           → loader.rs (read & parse into RawConfig)
//!     ▼                           │
//! builder.rs (setter per field ◀──┘
//!     → validation.rs checks each value as it arrives)
//!     → build() checks address and port are present
//!     → Config (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there are no setters
//! - Only address and port are mandatory, everything else has a default
//! - Per-field errors are raised when the value is supplied, missing
//!   fields only at build time

pub mod builder;
pub mod loader;
pub mod schema;
pub mod validation;

pub use builder::ConfigBuilder;
pub use loader::{load_config, parse_config, LoadError};
pub use schema::{Config, RawConfig};
pub use validation::{ConfigError, ConfigResult, Field};
