//! OS signal handling.
//!
//! SIGINT and SIGTERM both trigger a graceful shutdown.

use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// Resolve once SIGINT (Ctrl+C) or, on unix, SIGTERM is received.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received"),
        _ = terminate => tracing::info!("SIGTERM received"),
    }
}

/// Spawn a task that triggers `shutdown` on the first termination signal.
pub fn spawn_signal_handler(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });
}
