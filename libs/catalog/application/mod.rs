//! Application Layer
//!
//! Contains use cases and application services.
//! This layer depends on domain and infrastructure layers.

pub mod facade;
pub mod query;
pub mod sync;

// Re-export application facade for binaries
pub use facade::{init_logging, init_logging_with_level, CatalogApp};

pub use query::{CatalogQueries, QueryError};

pub use sync::{
    CatalogCrawler, CatalogSyncService, CrawlError, CrawlStats, CutoffReconciler, ReconcileStats,
};
