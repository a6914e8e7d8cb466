use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis_api_url: String,
    /// Without a key every analysis takes the keyword fallback path.
    pub analysis_api_key: Option<String>,
    pub analysis_model: String,
    pub analysis_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analysis_api_url: env_or("ANALYSIS_API_URL", DEFAULT_API_URL),
            analysis_api_key: std::env::var("ANALYSIS_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            analysis_model: env_or("ANALYSIS_MODEL", DEFAULT_MODEL),
            analysis_timeout: Duration::from_secs(
                env_or("ANALYSIS_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_url: self.analysis_api_url.clone(),
            api_key: self.analysis_api_key.clone(),
            model: self.analysis_model.clone(),
            request_timeout: self.analysis_timeout,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
