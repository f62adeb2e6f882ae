//! Employee API façade.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http (axum router, request id, tracing)     │
//!                           │        │                                     │
//!                           │        ▼                                     │
//!                           │   employee::service ──▶ employee::query      │
//!                           │        │   (delete: id → name → delete)      │
//!                           │        ▼                                     │
//!     Client Response       │   upstream::client (reqwest) ────────────────┼──▶ Upstream
//!     ◀─────────────────────┼── response (EmployeeError → status)          │    employee API
//!                           └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use employee_api::http::HttpServer;
use employee_api::lifecycle::{resolve_config, signals, Overrides, Shutdown};
use employee_api::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "employee-api")]
#[command(about = "REST façade over the upstream employee API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the upstream base URL
    #[arg(long)]
    upstream_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        Overrides {
            bind_address: cli.bind,
            upstream_url: cli.upstream_url,
        },
    )?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // validated at load time
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown.clone());

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
