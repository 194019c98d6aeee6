use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything is optional or defaulted — the service runs with no
/// environment at all, on local fallbacks only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the LLM project generator when present.
    pub anthropic_api_key: Option<String>,
    /// Optional remote job-statistics endpoint; static fallback data is
    /// used when unset or unreachable.
    pub stats_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            stats_api_url: optional_env("STATS_API_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and empty-string variables both mean "absent".
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
