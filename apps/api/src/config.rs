use anyhow::{Context, Result};

use crate::fit::settings::TemplateId;

/// Application configuration loaded from environment variables.
/// Every variable has a default — the engine has no external collaborators
/// that would require configuration to exist.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_template: TemplateId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_template = match std::env::var("RATTLE_DEFAULT_TEMPLATE") {
            Ok(value) => value
                .parse::<TemplateId>()
                .map_err(|e| anyhow::anyhow!("RATTLE_DEFAULT_TEMPLATE: {e}"))?,
            Err(_) => TemplateId::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_template,
        })
    }
}
