//! Metrics collection and exposition.
//!
//! # Metrics
//! - `facade_requests_total` (counter): inbound requests by method, status
//! - `facade_request_duration_seconds` (histogram): inbound latency
//! - `upstream_calls_total` (counter): upstream calls by operation, outcome
//! - `upstream_call_duration_seconds` (histogram): upstream latency

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

use crate::error::EmployeeError;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    counter!("facade_requests_total", &labels).increment(1);
    histogram!("facade_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}

/// Record one upstream call with its classified outcome.
pub fn record_upstream_call<T>(operation: &'static str, result: &Result<T, EmployeeError>, start: Instant) {
    let outcome = upstream_outcome(result);
    counter!("upstream_calls_total", "operation" => operation, "outcome" => outcome).increment(1);
    histogram!("upstream_call_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

fn upstream_outcome<T>(result: &Result<T, EmployeeError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(EmployeeError::NotFound(_)) => "not_found",
        Err(EmployeeError::ValidationFailed(_)) => "rejected",
        Err(EmployeeError::UpstreamUnavailable(_)) => "unavailable",
    }
}

/// Middleware recording every inbound request.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let response = next.run(request).await;
    record_request(&method, response.status().as_u16(), start);
    response
}
