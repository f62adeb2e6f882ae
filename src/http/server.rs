//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all employee handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::FacadeConfig;
use crate::employee::EmployeeService;
use crate::http::handlers;
use crate::http::request::{request_id_of, MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics;
use crate::upstream::{ClientBuildError, EmployeeClient, HttpEmployeeClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService>,
}

/// HTTP server for the employee façade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server talking to the configured upstream over HTTP.
    pub fn new(config: FacadeConfig) -> Result<Self, ClientBuildError> {
        let client = HttpEmployeeClient::new(&config.upstream)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server on top of an arbitrary upstream client.
    pub fn with_client(config: FacadeConfig, client: Arc<dyn EmployeeClient>) -> Self {
        let state = AppState {
            service: Arc::new(EmployeeService::new(client)),
        };
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.api.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &FacadeConfig, state: AppState) -> Router {
    let employees = Router::new()
        .route(
            "/employees",
            get(handlers::get_all_employees).post(handlers::create_employee),
        )
        .route("/employees/search", get(handlers::search_employees_unfiltered))
        .route("/employees/search/", get(handlers::search_employees_unfiltered))
        .route("/employees/search/{fragment}", get(handlers::search_employees))
        .route("/employees/highestSalary", get(handlers::highest_salary))
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(handlers::top_ten_highest_earning_names),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee_by_id).delete(handlers::delete_employee_by_id),
        );

    let api = match config.api.base_path.as_str() {
        "" => employees,
        base_path => Router::new().nest(base_path, employees),
    };

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id_of(request),
            )
        }))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
}
