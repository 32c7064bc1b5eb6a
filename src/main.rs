mod config;
mod db;
mod error;
mod http;
mod models;
mod notifier;
mod processor;
#[cfg(test)]
mod testing;
mod weather;

use config::AppConfig;
use db::postgres::PgRepository;
use notifier::NoticeSync;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use weather::WebhookWeatherClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Starting Airport Ops Service...");

    // Init DB
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    info!("Connected to database");
    db::migrate(&pool).await?;
    info!("Schema migrations applied");

    // Outbound clients
    let timeout = Duration::from_secs(config.weather_timeout_secs);
    let weather = Arc::new(WebhookWeatherClient::new(&config.weather_webhook_url, timeout)?);
    let sync = NoticeSync::new(config.notice_sync_url.clone(), timeout)?;
    if config.notice_sync_url.is_none() {
        info!("NOTICE_SYNC_URL not set, notice sync disabled");
    }

    let state = http::AppState::new(Arc::new(PgRepository::new(pool)), weather, sync);
    let app = http::create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
