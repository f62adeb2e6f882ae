//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (bind address, upstream URL)
//!     → validation.rs (semantic checks)
//!     → FacadeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{
    ApiConfig, FacadeConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
