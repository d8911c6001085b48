//! # HTTP Surface
//!
//! axum routers for the three services plus the shared [`serve`] loop. Handlers only extract
//! the request, call a controller and render the result; every failure goes through
//! [`ApiError`].

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod order;

pub use error::{json_error, ApiError};

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Bind `addr` and serve `router` until Ctrl-C. In-flight requests are allowed to finish.
pub async fn serve(router: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server bound");

    axum::serve(listener, router.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("HTTP server shutting down gracefully"),
        Err(error) => {
            // Without a signal handler the server runs until the process is killed.
            warn!(%error, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
