//! HTTP client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue one HTTP call per upstream capability
//! - Map upstream status codes and envelopes to typed outcomes
//! - Tolerate the two request shapes upstream accepts for delete-by-name
//!
//! # Design Decisions
//! - No retries except the single delete fallback, no backoff
//! - Timeouts are opt-in; otherwise reqwest defaults apply
//! - Path segments are percent-encoded through `url`, never formatted in

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

use crate::config::schema::UpstreamConfig;
use crate::employee::model::{CreateEmployeeInput, Employee};
use crate::error::{EmployeeError, Result};
use crate::observability::metrics;
use crate::upstream::types::{ApiResponse, CreateEmployeeBody, DeleteByNameBody, UpstreamEmployee};

/// One operation per upstream capability.
#[async_trait]
pub trait EmployeeClient: Send + Sync {
    /// `GET /employee`. An absent data set is an empty list.
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// `GET /employee/{id}`. 404 or null data is `NotFound`.
    async fn get_by_id(&self, id: &str) -> Result<Employee>;

    /// `POST /employee`. Non-2xx or null data is `UpstreamUnavailable`.
    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee>;

    /// `DELETE /employee/{name}`, with a body-carrying fallback on 405/5xx.
    ///
    /// `Ok(false)` means upstream had nothing to delete.
    async fn delete_by_name(&self, name: &str) -> Result<bool>;
}

/// Failure to construct the HTTP client from configuration.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid upstream base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// reqwest-backed [`EmployeeClient`].
#[derive(Clone)]
pub struct HttpEmployeeClient {
    http: Client,
    base_url: Url,
}

impl HttpEmployeeClient {
    /// Build a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> std::result::Result<Self, ClientBuildError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        tracing::info!(base_url = %base_url, "Upstream client initialized");

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// The upstream base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `/employee[/segment]` against the base URL.
    fn endpoint(&self, segment: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                EmployeeError::UpstreamUnavailable(format!(
                    "upstream base URL cannot be a base: {}",
                    self.base_url
                ))
            })?;
            path.pop_if_empty().push("employee");
            if let Some(segment) = segment {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Send `DELETE /employee` with `{"name": ...}` as the body.
    async fn delete_by_name_with_body(&self, name: &str) -> Result<bool> {
        let url = self.endpoint(None)?;
        let resp = self
            .http
            .delete(url)
            .json(&DeleteByNameBody { name })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return read_deleted_flag(resp).await;
        }
        if status == StatusCode::NOT_FOUND {
            tracing::info!(name = %name, "DELETE /employee (body) -> 404");
            return Ok(false);
        }

        Err(unexpected_status("DELETE /employee", status))
    }

    async fn delete_inner(&self, name: &str) -> Result<bool> {
        let url = self.endpoint(Some(name))?;
        let resp = self.http.delete(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return read_deleted_flag(resp).await;
        }
        if status == StatusCode::NOT_FOUND {
            tracing::info!(name = %name, "DELETE /employee/{{name}} -> 404 (not found)");
            return Ok(false);
        }
        if status == StatusCode::METHOD_NOT_ALLOWED || status.is_server_error() {
            tracing::warn!(
                name = %name,
                status = %status,
                "DELETE /employee/{{name}} rejected, retrying with body"
            );
            return self.delete_by_name_with_body(name).await;
        }

        Err(unexpected_status("DELETE /employee/{name}", status))
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        let start = Instant::now();
        tracing::info!("GET /employee");

        let result: Result<Vec<Employee>> = async {
            let resp = self.http.get(self.endpoint(None)?).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(unexpected_status("GET /employee", status));
            }
            let body: ApiResponse<Vec<UpstreamEmployee>> = resp.json().await?;
            Ok(body
                .data
                .unwrap_or_default()
                .into_iter()
                .map(Employee::from)
                .collect())
        }
        .await;

        match &result {
            Ok(list) => tracing::info!(count = list.len(), "GET /employee succeeded"),
            Err(e) => tracing::error!(error = %e, "GET /employee failed"),
        }
        metrics::record_upstream_call("list_all", &result, start);
        result
    }

    async fn get_by_id(&self, id: &str) -> Result<Employee> {
        let start = Instant::now();
        tracing::info!(id = %id, "GET /employee/{{id}}");

        let result: Result<Employee> = async {
            let resp = self.http.get(self.endpoint(Some(id))?).send().await?;
            let status = resp.status();
            if status == StatusCode::NOT_FOUND {
                return Err(EmployeeError::NotFound(format!("Employee not found: {id}")));
            }
            if !status.is_success() {
                return Err(unexpected_status("GET /employee/{id}", status));
            }
            let body: ApiResponse<UpstreamEmployee> = resp.json().await?;
            body.data
                .map(Employee::from)
                .ok_or_else(|| EmployeeError::NotFound(format!("Employee not found: {id}")))
        }
        .await;

        match &result {
            Ok(_) => tracing::info!(id = %id, "GET /employee/{{id}} succeeded"),
            Err(e) if e.is_not_found() => tracing::info!(id = %id, "GET /employee/{{id}} not found"),
            Err(e) => tracing::error!(id = %id, error = %e, "GET /employee/{{id}} failed"),
        }
        metrics::record_upstream_call("get_by_id", &result, start);
        result
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee> {
        let start = Instant::now();
        tracing::info!(
            name = %input.name,
            salary = input.salary,
            age = input.age,
            title = %input.title,
            "POST /employee"
        );

        let result: Result<Employee> = async {
            let resp = self
                .http
                .post(self.endpoint(None)?)
                .json(&CreateEmployeeBody::from(input))
                .send()
                .await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(unexpected_status("POST /employee", status));
            }
            let body: ApiResponse<UpstreamEmployee> = resp.json().await?;
            body.data.map(Employee::from).ok_or_else(|| {
                EmployeeError::UpstreamUnavailable("POST /employee returned no data".to_string())
            })
        }
        .await;

        match &result {
            Ok(e) => tracing::info!(id = %e.id, "POST /employee succeeded"),
            Err(e) => tracing::error!(error = %e, "POST /employee failed"),
        }
        metrics::record_upstream_call("create", &result, start);
        result
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        let start = Instant::now();
        tracing::info!(name = %name, "DELETE /employee/{{name}}");

        let result = self.delete_inner(name).await;
        if let Err(e) = &result {
            tracing::error!(name = %name, error = %e, "DELETE /employee/{{name}} failed");
        }
        metrics::record_upstream_call("delete_by_name", &result, start);
        result
    }
}

impl std::fmt::Debug for HttpEmployeeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEmployeeClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn parse_base_url(raw: &str) -> std::result::Result<Url, ClientBuildError> {
    let invalid = |reason: String| ClientBuildError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }
    Ok(url)
}

/// True only when upstream explicitly affirms the deletion.
///
/// An empty or undecodable 2xx body is not an affirmation and reads as `false`.
async fn read_deleted_flag(resp: Response) -> Result<bool> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice::<ApiResponse<bool>>(&bytes)
        .map(|body| body.data == Some(true))
        .unwrap_or(false))
}

fn unexpected_status(call: &str, status: StatusCode) -> EmployeeError {
    EmployeeError::UpstreamUnavailable(format!("{call} returned {status}"))
}
