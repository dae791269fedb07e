//! External API clients

pub mod provider;

pub use provider::{OddsProvider, ProviderClient, ProviderError};
