use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// AI-suggestion webhook endpoint. Absent means the service runs in
    /// offline mode and every suggestion request uses the local fallback.
    pub suggestions_webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggestions_webhook_url: std::env::var("SUGGESTIONS_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.is_empty()),
        })
    }
}
