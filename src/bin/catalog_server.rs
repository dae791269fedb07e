use anyhow::{Context, Result};
use odds_catalog::bin_common::{load_config_from_env, parse_args, ConfigType};
use odds_catalog::catalog::{init_logging_with_level, CatalogApp, CatalogConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // An explicit path argument wins over CATALOG_CONFIG_PATH
    let config_type = match parse_args().into_iter().next() {
        Some(path) => ConfigType::Custom(path),
        None => ConfigType::Catalog,
    };
    let config_path = load_config_from_env(config_type);

    // Load config first (before logging is initialized)
    let config = CatalogConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // Initialize logging with configured level
    init_logging_with_level(&config.log_level);
    config.log();

    let app = CatalogApp::new(&config)?;

    print_banner("Odds Catalog", config.sync.interval_secs, &config.http.bind_addr);

    app.run().await?;

    print_shutdown("Odds catalog");
    Ok(())
}

fn print_banner(name: &str, interval_secs: u64, bind_addr: &str) {
    info!("");
    info!("========================================");
    info!("Starting {}", name);
    info!("Sync interval: {}s", interval_secs);
    info!("HTTP API: http://{}/v1", bind_addr);
    info!("Press Ctrl+C to stop");
    info!("========================================");
    info!("");
}

fn print_shutdown(name: &str) {
    info!("");
    info!("========================================");
    info!("{} stopped gracefully", name);
    info!("========================================");
}
