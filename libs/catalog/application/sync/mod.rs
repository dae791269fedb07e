//! Catalog synchronization: ingestion crawl, cutoff reconciliation and the
//! periodic loop driving both.

pub mod crawler;
pub mod normalize;
pub mod reconciler;
pub mod service;

pub use crawler::{CatalogCrawler, CrawlError, CrawlStats};
pub use normalize::{normalize_event, NormalizeError};
pub use reconciler::{CutoffReconciler, ReconcileStats};
pub use service::{CatalogSyncService, SyncCycle};
