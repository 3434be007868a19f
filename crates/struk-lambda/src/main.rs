use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use struk_export::chrome::ChromeEngine;
use struk_lambda::config::AppConfig;
use struk_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        time_zone = %config.time_zone,
        chrome_path = ?config.chrome_path,
        store = %config.store.name,
        "starting receipt renderer"
    );

    let state = AppState::new(&config, Arc::new(ChromeEngine))?;

    lambda_http::run(struk_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
