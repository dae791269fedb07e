//! CLI utilities for binaries
//!
//! Resolves the configuration file path from the environment.

use std::path::PathBuf;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Catalog service configuration (catalog_config.yaml)
    Catalog,
    /// Explicit path, never overridden by the environment
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Catalog => "config/catalog_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Environment variable overriding the default path, if any
    pub fn env_var_name(&self) -> Option<&str> {
        match self {
            ConfigType::Catalog => Some("CATALOG_CONFIG_PATH"),
            ConfigType::Custom(_) => None,
        }
    }
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use odds_catalog::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Custom("catalog.yaml".to_string()));
/// assert_eq!(path.to_str(), Some("catalog.yaml"));
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    config_type
        .env_var_name()
        .and_then(|name| std::env::var(name).ok())
        .unwrap_or_else(|| config_type.default_path().to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}
