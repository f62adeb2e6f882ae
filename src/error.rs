//! Error taxonomy shared by the upstream client, the service and the façade.
//!
//! # Design Decisions
//! - Three outcomes only: bad input, absence, upstream failure
//! - Status-code mapping is a pure function, applied at the HTTP boundary
//! - Transport errors never leak as their own variant; they are upstream failures

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Create payload rejected before any upstream call.
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// Identifier or name did not resolve at the point it was checked.
    #[error("{0}")]
    NotFound(String),

    /// Network, protocol or unclassified upstream status failure.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

pub type Result<T> = std::result::Result<T, EmployeeError>;

impl EmployeeError {
    /// HTTP status the façade answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            EmployeeError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            EmployeeError::NotFound(_) => StatusCode::NOT_FOUND,
            EmployeeError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EmployeeError::NotFound(_))
    }

    /// Collapse anything that is not an absence signal into an upstream failure.
    pub(crate) fn into_upstream(self) -> Self {
        match self {
            EmployeeError::NotFound(_) | EmployeeError::UpstreamUnavailable(_) => self,
            EmployeeError::ValidationFailed(msg) => EmployeeError::UpstreamUnavailable(msg),
        }
    }
}

impl From<reqwest::Error> for EmployeeError {
    fn from(e: reqwest::Error) -> Self {
        EmployeeError::UpstreamUnavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for EmployeeError {
    fn from(e: validator::ValidationErrors) -> Self {
        EmployeeError::ValidationFailed(e.to_string())
    }
}
