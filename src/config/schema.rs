//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file, and
//! every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the employee API façade.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FacadeConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Inbound API surface.
    pub api: ApiConfig,

    /// Upstream employee service.
    pub upstream: UpstreamConfig,

    /// Inbound timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8111").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8111".to_string(),
        }
    }
}

/// Inbound API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix every employee route is mounted under. Empty mounts at the root.
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api/v1".to_string(),
        }
    }
}

/// Upstream employee service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL the `/employee` endpoints are resolved against.
    pub base_url: String,

    /// Total per-call timeout in seconds. Unset leaves the transport default.
    pub timeout_secs: Option<u64>,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1".to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
