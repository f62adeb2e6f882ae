//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the caller sent none
//! - Echo the ID back on the response
//! - Expose the ID to the trace span of every request
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A caller-provided `x-request-id` is kept, never replaced

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Request ID of `request`, or `"unknown"` if none was assigned.
pub fn request_id_of<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_uuid() {
        let request = Request::new(());
        let id = MakeRequestUuidV4.make_request_id(&request).unwrap();
        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }

    #[test]
    fn test_request_id_of() {
        let request = Request::builder()
            .header("x-request-id", "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id_of(&request), "abc-123");
        assert_eq!(request_id_of(&Request::new(())), "unknown");
    }
}
