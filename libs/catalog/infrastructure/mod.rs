//! Infrastructure Layer
//!
//! Provider client, in-memory catalog store, configuration and process
//! plumbing. Depends on the domain layer but not on the application layer.

pub mod client;
pub mod config;
pub mod heartbeat;
pub mod logging;
pub mod shutdown;
pub mod store;

pub use client::{OddsProvider, ProviderClient, ProviderError};
pub use config::{CatalogConfig, ConfigError};
pub use heartbeat::Heartbeat;
pub use logging::{init_tracing, init_tracing_with_level};
pub use shutdown::ShutdownManager;
pub use store::{CatalogStats, CatalogStore, EventFilter, StoreError, UpsertOutcome};
