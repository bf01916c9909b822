//! HTTP server bootstrap.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;
use crate::error::Result;
use crate::utils::shutdown_signal;

/// Bind `addr` and serve the API until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
