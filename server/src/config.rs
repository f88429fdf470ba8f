use anyhow::{Context, Result};
use platform_db::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub cors_allowed_origins: Vec<String>,
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Reads the process environment. `.env` is expected to be loaded
    /// already.
    pub fn load() -> Result<Self> {
        let database = DatabaseSettings::from_env().context("database settings")?;

        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let auto_migrate = std::env::var("AUTO_MIGRATE")
            .ok()
            .map(|val| parse_flag(&val))
            .unwrap_or(false);

        Ok(Self {
            database,
            cors_allowed_origins,
            auto_migrate,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
