//! Odds Catalog
//!
//! Mirrors a sports-betting odds provider's catalog (sports, categories,
//! competitions, events with their odds) into an in-memory store, keeps
//! event liveness current near cutoff, and serves the result over HTTP.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// Re-export commonly used items
pub use application::{init_logging, init_logging_with_level, CatalogApp, CatalogQueries};
pub use domain::{Category, Competition, Event, Identifier, Sport, TeamIdentifier};
pub use infrastructure::{
    CatalogConfig, CatalogStore, Heartbeat, OddsProvider, ProviderClient, ShutdownManager,
};
