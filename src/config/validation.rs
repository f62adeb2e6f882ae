//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream base URL is usable as a base
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FacadeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;
use url::Url;

use crate::config::schema::FacadeConfig;

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a loaded configuration, collecting every error found.
pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    let base_path = &config.api.base_path;
    if !base_path.is_empty() && (!base_path.starts_with('/') || base_path.ends_with('/')) {
        errors.push(ValidationError::new(
            "api.base_path",
            "must be empty or start with '/' and not end with '/'",
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => errors.push(ValidationError::new(
            "upstream.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError::new(
            "upstream.base_url",
            "URL cannot be a base",
        )),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::new("upstream.base_url", e.to_string())),
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::new("upstream.timeout_secs", "must be > 0"));
    }
    if config.upstream.connect_timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "upstream.connect_timeout_secs",
            "must be > 0",
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be > 0"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
