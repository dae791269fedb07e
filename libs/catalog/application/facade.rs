//! Application Facade
//!
//! Public API for binaries (presentation layer).
//! Wires the provider, the shared store, the sync loop and the HTTP API.

use super::sync::CatalogSyncService;
use crate::infrastructure::client::provider::OddsProvider;
use crate::infrastructure::{
    init_tracing, init_tracing_with_level, CatalogConfig, CatalogStore, ProviderClient,
    ShutdownManager,
};
use crate::interfaces::http;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// Application facade for the catalog service
pub struct CatalogApp {
    pub store: Arc<CatalogStore>,
    pub sync_service: Arc<CatalogSyncService>,
    pub shutdown: ShutdownManager,
    bind_addr: SocketAddr,
    interval_secs: u64,
}

impl CatalogApp {
    /// Initialize the service against the configured provider
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let provider = ProviderClient::new(
            config.provider.base_url.as_str(),
            config.provider.api_key.as_str(),
            config.provider.request_timeout(),
        )?;
        Self::with_provider(Arc::new(provider), config)
    }

    /// Initialize the service against any provider implementation
    pub fn with_provider(
        provider: Arc<dyn OddsProvider>,
        config: &CatalogConfig,
    ) -> anyhow::Result<Self> {
        let store = Arc::new(CatalogStore::new());
        let sync_service = Arc::new(CatalogSyncService::new(
            provider,
            Arc::clone(&store),
            &config.sync,
        ));

        Ok(Self {
            store,
            sync_service,
            shutdown: ShutdownManager::new(),
            bind_addr: config.bind_addr()?,
            interval_secs: config.sync.interval_secs,
        })
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.shutdown.is_running()
    }

    /// Serve the HTTP API and run the sync loop until Ctrl+C
    pub async fn run(self) -> anyhow::Result<()> {
        self.shutdown.spawn_signal_handler();

        let server_shutdown = self.shutdown.clone();
        let server = tokio::spawn(http::serve(
            self.bind_addr,
            Arc::clone(&self.store),
            self.shutdown.clone(),
        ));

        let sync = tokio::spawn(
            Arc::clone(&self.sync_service).start_sync_loop(self.interval_secs, self.shutdown.flag()),
        );

        let served = server.await?;
        if let Err(e) = &served {
            error!("HTTP server failed: {}", e);
            // Stop syncing when nothing can be served
            server_shutdown.trigger();
        }

        sync.await?;
        info!("Catalog service stopped");

        served.map_err(Into::into)
    }
}

/// Initialize tracing for binaries with default (info) level
pub fn init_logging() {
    init_tracing();
}

/// Initialize tracing for binaries with a specific log level
pub fn init_logging_with_level(level: &str) {
    init_tracing_with_level(level);
}
