//! Error responses.
//!
//! Maps [`EmployeeError`] to an HTTP status and a minimal JSON body:
//! `{"status": 404, "error": "Not Found", "message": "..."}`.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::EmployeeError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
