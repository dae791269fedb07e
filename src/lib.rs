//! Odds Catalog - Main Library
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI)
//! - **catalog**: Core catalog logic (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use odds_catalog::bin_common::{load_config_from_env, ConfigType};
//! use odds_catalog::catalog::CatalogApp;
//! ```

// Re-export workspace library for convenience
pub use catalog;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, ConfigType};
}
