use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env if present
        let _ = dotenvy::dotenv();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16")?;
        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".to_string());

        // Demo fixtures are on by default in debug builds only.
        let seed_demo = match std::env::var("SEED_DEMO") {
            Ok(raw) => matches!(raw.as_str(), "1" | "true" | "yes"),
            Err(_) => cfg!(debug_assertions),
        };

        Ok(Self {
            host,
            port,
            log_level,
            seed_demo,
        })
    }
}
