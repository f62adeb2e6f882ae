//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FacadeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<FacadeConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load a configuration file without validating it.
///
/// Callers that apply overrides validate afterwards with [`validate_config`].
pub fn read_config(path: &Path) -> Result<FacadeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FacadeConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8111");
        assert_eq!(config.api.base_path, "/api/v1");
        assert_eq!(config.upstream.base_url, "http://localhost:8112/api/v1");
        assert_eq!(config.upstream.timeout_secs, None);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [upstream]
            base_url = "https://employees.internal/api/v1"
            timeout_secs = 10

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.base_url, "https://employees.internal/api/v1");
        assert_eq!(config.upstream.timeout_secs, Some(10));
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[listener\nbind_address = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_config("[observability]\nlog_format = \"xml\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError {
                field: "a",
                message: "bad".into(),
            },
            ValidationError {
                field: "b",
                message: "worse".into(),
            },
        ]);
        assert_eq!(err.to_string(), "Validation failed: a: bad, b: worse");
    }

    #[test]
    fn test_errors_expose_source() {
        use std::error::Error as _;

        let err = parse_config("[listener\nbind_address = 1").unwrap_err();
        assert!(err.to_string().starts_with("Parse error: "));
        assert!(err.source().is_some());

        let err = ConfigError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(err.source().is_some());
    }
}
