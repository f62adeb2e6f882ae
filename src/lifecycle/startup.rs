//! Startup configuration resolution.
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - CLI overrides are applied before validation, so they are validated too

use std::path::Path;

use crate::config::{read_config, validate_config, ConfigError, FacadeConfig};

/// Values given on the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub upstream_url: Option<String>,
}

/// Read the config file (or defaults), apply overrides, and validate.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<FacadeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => FacadeConfig::default(),
    };

    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }
    if let Some(upstream_url) = overrides.upstream_url {
        config.upstream.base_url = upstream_url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
