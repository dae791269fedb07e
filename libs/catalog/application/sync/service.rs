use super::crawler::CatalogCrawler;
use super::reconciler::{CutoffReconciler, ReconcileStats};
use crate::infrastructure::client::provider::OddsProvider;
use crate::infrastructure::config::SyncConfig;
use crate::infrastructure::store::CatalogStore;
use crate::infrastructure::{Heartbeat, ShutdownManager};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Periodic ingestion followed by cutoff reconciliation
pub struct CatalogSyncService {
    crawler: CatalogCrawler,
    reconciler: CutoffReconciler,
    store: Arc<CatalogStore>,
    heartbeat_secs: u64,
}

/// Outcome of one ingest + reconcile pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncCycle {
    pub ingested: bool,
    pub reconcile: ReconcileStats,
}

impl CatalogSyncService {
    pub fn new(
        provider: Arc<dyn OddsProvider>,
        store: Arc<CatalogStore>,
        config: &SyncConfig,
    ) -> Self {
        Self {
            crawler: CatalogCrawler::new(Arc::clone(&provider), Arc::clone(&store)),
            reconciler: CutoffReconciler::new(provider, Arc::clone(&store), config.cutoff_window_secs),
            store,
            heartbeat_secs: config.heartbeat_secs,
        }
    }

    /// Run ingestion then reconciliation. A failed ingestion is logged and
    /// reconciliation still runs against what the store already holds.
    pub async fn run_once(&self) -> SyncCycle {
        let ingested = match self.crawler.store_all_events().await {
            Ok(_) => true,
            Err(e) => {
                error!("Error during event ingestion: {}", e);
                false
            }
        };

        let reconcile = self.reconciler.check_events_close_to_cutoff().await;
        if reconcile.checked > 0 {
            info!(
                checked = reconcile.checked,
                inactivated = reconcile.inactivated,
                failed = reconcile.failed,
                "Checked events close to cutoff"
            );
        }

        SyncCycle { ingested, reconcile }
    }

    /// Start the sync loop
    ///
    /// Runs until `shutdown` is cleared. The flag is only checked between
    /// cycles, so an in-flight cycle always completes.
    pub async fn start_sync_loop(self: Arc<Self>, interval_secs: u64, shutdown: Arc<AtomicBool>) {
        let shutdown = ShutdownManager::from_flag(shutdown);
        let mut heartbeat = Heartbeat::new(self.heartbeat_secs);
        let mut cycle_count: u64 = 0;

        info!("Starting catalog sync (interval: {}s)", interval_secs);

        while shutdown.is_running() {
            cycle_count += 1;
            self.run_once().await;

            if heartbeat.tick() {
                let stats = self.store.stats();
                info!(
                    cycles = cycle_count,
                    sports = stats.sports,
                    categories = stats.categories,
                    competitions = stats.competitions,
                    events = stats.events,
                    active_events = stats.active_events,
                    "Heartbeat: catalog totals"
                );
            }

            shutdown
                .interruptible_sleep(Duration::from_secs(interval_secs))
                .await;
        }

        info!("Catalog sync stopped after {} cycles", cycle_count);
    }
}
