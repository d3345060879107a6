//! Server lifecycle: serve until interrupted, then drain within a bound.

use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// How long in-flight requests get to finish after the shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Serves `app` on `listener` until SIGINT/SIGTERM, then drains in-flight
/// requests for at most [`SHUTDOWN_GRACE`] before returning.
///
/// Two tasks coordinate over a oneshot channel: the accept loop runs on a
/// spawned task armed with graceful shutdown, while this task watches for
/// the interrupt and fires the channel.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    info!("shutdown signal received, draining in-flight requests");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(joined) => joined??,
        Err(_) => warn!("drain deadline exceeded, exiting with requests in flight"),
    }

    info!("server stopped");
    Ok(())
}

/// Resolves on the first SIGTERM or SIGINT the process receives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
}
