//! HTTP read API over the catalog

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;

use crate::infrastructure::store::CatalogStore;
use crate::infrastructure::ShutdownManager;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the API on `addr` until `shutdown` is triggered
pub async fn serve(
    addr: SocketAddr,
    store: Arc<CatalogStore>,
    shutdown: ShutdownManager,
) -> std::io::Result<()> {
    let app = create_router(AppState::new(store));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.wait().await })
        .await
}
