//! Re-checks events near their cutoff and ends trading for the ones the
//! provider no longer trades.

use crate::domain::is_trading_status;
use crate::infrastructure::client::provider::OddsProvider;
use crate::infrastructure::store::CatalogStore;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub checked: usize,
    pub inactivated: usize,
    pub failed: usize,
}

pub struct CutoffReconciler {
    provider: Arc<dyn OddsProvider>,
    store: Arc<CatalogStore>,
    window: Duration,
}

impl CutoffReconciler {
    /// `window_secs` is how far ahead of cutoff an active event gets re-checked
    pub fn new(provider: Arc<dyn OddsProvider>, store: Arc<CatalogStore>, window_secs: u64) -> Self {
        let window = i64::try_from(window_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            provider,
            store,
            window,
        }
    }

    pub async fn check_events_close_to_cutoff(&self) -> ReconcileStats {
        let mut stats = ReconcileStats::default();
        let deadline = Utc::now()
            .checked_add_signed(self.window)
            .unwrap_or(chrono::DateTime::<Utc>::MAX_UTC);

        for event in self.store.list_events_cutoff_before(deadline) {
            stats.checked += 1;

            let fresh = match self.provider.fetch_event(event.key()).await {
                Ok(fresh) => fresh,
                Err(e) => {
                    warn!(event = %event.key(), "Fetching event failed: {}", e);
                    stats.failed += 1;
                    continue;
                }
            };

            if is_trading_status(&fresh.status) {
                debug!(event = %event.key(), status = %fresh.status, "Event still trading");
                continue;
            }

            match self.store.inactivate_event(event.key()) {
                Ok(true) => {
                    info!(event = %event.key(), status = %fresh.status, "Event inactivated");
                    stats.inactivated += 1;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(event = %event.key(), "Inactivating event failed: {}", e);
                    stats.failed += 1;
                }
            }
        }

        stats
    }
}
