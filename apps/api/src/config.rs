use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub embedding_api_url: String,
    pub embedding_api_key: String,
    pub embedding_model: String,
    pub embedding_dimensions: Option<usize>,
    pub embedding_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(optional_env("DATA_DIR").unwrap_or_else(|| "data".to_string())),
            embedding_api_url: require_env("EMBEDDING_API_URL")?,
            embedding_api_key: require_env("EMBEDDING_API_KEY")?,
            embedding_model: optional_env("EMBEDDING_MODEL")
                .unwrap_or_else(|| "text-embedding-3-small".to_string()),
            embedding_dimensions: optional_env("EMBEDDING_DIMENSIONS")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("EMBEDDING_DIMENSIONS must be a positive integer")?,
            embedding_timeout: Duration::from_secs(
                optional_env("EMBEDDING_TIMEOUT_SECS")
                    .unwrap_or_else(|| "60".to_string())
                    .parse::<u64>()
                    .context("EMBEDDING_TIMEOUT_SECS must be a number of seconds")?,
            ),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
