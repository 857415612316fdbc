use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::handlers::{self, AppState};

pub fn build_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/generate", post(handlers::generate_json))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Loopback unless `public`, in which case every interface.
pub fn bind_address(public: bool, port: u16) -> SocketAddr {
    let ip = if public {
        Ipv4Addr::UNSPECIFIED
    } else {
        Ipv4Addr::LOCALHOST
    };
    SocketAddr::from((ip, port))
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("JavaScript Coding Bot listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Interrupt received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}. Running until killed.", e);
            std::future::pending::<()>().await;
        }
    }
}
