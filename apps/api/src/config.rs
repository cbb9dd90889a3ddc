use anyhow::{Context, Result};

use crate::export::print::DEFAULT_PRINT_DELAY_MS;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Overrides the request-derived origin used to absolutize legacy picture paths.
    /// Must be set unless every proxy in front of the service rewrites the
    /// `Host` and `x-forwarded-*` headers; otherwise clients choose the origin.
    pub public_origin: Option<String>,
    pub print_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_origin: optional_env("PUBLIC_ORIGIN"),
            print_delay_ms: match optional_env("PRINT_DELAY_MS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("PRINT_DELAY_MS must be a non-negative integer")?,
                None => DEFAULT_PRINT_DELAY_MS,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
