use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use receipt_api::{run_server, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::load()?;

    // Initialize tracing; RUST_LOG wins over LOG_LEVEL
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid LOG_LEVEL '{}'", config.log_level))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!(host = %config.host, port = config.port, "Starting Receipt API server...");

    run_server(&config, AppState::in_memory())
        .await
        .context("server error")?;

    Ok(())
}
