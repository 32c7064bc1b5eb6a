use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub weather_webhook_url: String,
    pub weather_timeout_secs: u64,
    pub notice_sync_url: Option<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let http_host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("HTTP_PORT must be a valid port number")?;

        let weather_webhook_url = env::var("WEATHER_WEBHOOK_URL")
            .unwrap_or_else(|_| "http://localhost:5678/webhook/weather".to_string());
        let weather_timeout_secs = env::var("WEATHER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15);
        // Unset or blank disables outbound notice sync.
        let notice_sync_url = env::var("NOTICE_SYNC_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "airport_ops".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "airport".to_string());
        let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "airport".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let database_url = format!(
            "postgres://{}:{}@{}:{}/{}",
            db_user, db_pwd, db_host, db_port, db_name
        );

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            http_host,
            http_port,
            weather_webhook_url,
            weather_timeout_secs,
            notice_sync_url,
            database_url,
            db_max_connections,
            log_level,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
