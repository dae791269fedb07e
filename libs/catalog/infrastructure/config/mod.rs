use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the provider access key
pub const API_KEY_ENV: &str = "PROVIDER_API_KEY";
/// Optional environment override of `provider.base_url`
pub const BASE_URL_ENV: &str = "PROVIDER_BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Catalog service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub http: HttpConfig,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Access key from .env (not in YAML)
    #[serde(skip)]
    pub api_key: String,
}

impl ProviderConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_sync_interval")]
    pub interval_secs: u64,
    /// How far ahead of cutoff events are re-checked against the provider
    #[serde(default = "default_cutoff_window")]
    pub cutoff_window_secs: u64,
    #[serde(default = "default_heartbeat")]
    pub heartbeat_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_sync_interval(),
            cutoff_window_secs: default_cutoff_window(),
            heartbeat_secs: default_heartbeat(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_request_timeout() -> u64 {
    10
}

fn default_sync_interval() -> u64 {
    5
}

fn default_cutoff_window() -> u64 {
    300
}

fn default_heartbeat() -> u64 {
    300
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CatalogConfig {
    /// Load configuration from YAML file and .env
    ///
    /// Fails when the provider access key is missing or empty: the service
    /// cannot fetch anything without it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;

        // Don't fail if .env doesn't exist
        dotenv::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::EnvVarMissing(API_KEY_ENV.to_string()))?;

        let mut config = Self::parse(&yaml_content, api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            info!("Overriding provider base URL from environment variable");
            config.provider.base_url = base_url;
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse YAML content and attach the access key
    pub fn parse(yaml_content: &str, api_key: impl Into<String>) -> Result<Self> {
        let mut config: CatalogConfig = serde_yaml::from_str(yaml_content)?;
        config.provider.api_key = api_key.into();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(ConfigError::EnvVarMissing(API_KEY_ENV.to_string()));
        }
        if self.provider.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "provider.base_url cannot be empty".to_string(),
            ));
        }
        if self.provider.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "provider.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.sync.interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sync.interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.sync.cutoff_window_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sync.cutoff_window_secs must be greater than 0".to_string(),
            ));
        }
        if self.sync.heartbeat_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sync.heartbeat_secs must be greater than 0".to_string(),
            ));
        }
        if self.http.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "http.bind_addr is not a socket address: {}",
                self.http.bind_addr
            )));
        }
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.http.bind_addr.parse().map_err(|_| {
            ConfigError::ValidationError(format!("invalid bind address {}", self.http.bind_addr))
        })
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Provider URL: {}", self.provider.base_url);
        info!("  Request timeout: {} seconds", self.provider.request_timeout_secs);
        info!("  Sync interval: {} seconds", self.sync.interval_secs);
        info!("  Cutoff window: {} seconds", self.sync.cutoff_window_secs);
        info!("  HTTP bind address: {}", self.http.bind_addr);
        info!("  Log level: {}", self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
provider:
  base_url: https://sports-api.example.com
sync:
  interval_secs: 30
"#;

    #[test]
    fn test_parse_applies_defaults() {
        let config = CatalogConfig::parse(YAML, "secret").unwrap();

        assert_eq!(config.provider.api_key, "secret");
        assert_eq!(config.provider.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.sync.interval_secs, 30);
        assert_eq!(config.sync.cutoff_window_secs, 300);
        assert_eq!(config.http.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = CatalogConfig::parse(YAML, "  ");
        assert!(matches!(result, Err(ConfigError::EnvVarMissing(name)) if name == API_KEY_ENV));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::parse(YAML, "secret").unwrap();
        assert!(config.validate().is_ok());

        config.sync.interval_secs = 0;
        assert!(config.validate().is_err());
        config.sync.interval_secs = 5;

        config.sync.heartbeat_secs = 0;
        assert!(config.validate().is_err());
        config.sync.heartbeat_secs = 300;

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
        config.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.http.bind_addr = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_provider_section() {
        let result = CatalogConfig::parse("log_level: info\n", "secret");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = CatalogConfig::load("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let config = CatalogConfig::parse(&content, "secret").unwrap();
        assert_eq!(config.provider.base_url, "https://sports-api.example.com");
    }
}
