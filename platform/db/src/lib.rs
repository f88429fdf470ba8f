//! Connection pool wiring shared by the server binary and the test suite.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Shared pooled connection handle. Cheap to clone.
pub type DbPool = DatabaseConnection;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (set {0})")]
    MissingUrl(String),
    #[error("invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },
    #[error("failed to connect to database: {0}")]
    Connect(#[source] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

/// Environment-driven pool settings.
#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub sql_logging: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    8
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            sql_logging: false,
        }
    }

    /// In-memory SQLite pinned to a single connection so every query sees
    /// the same database.
    pub fn sqlite_memory() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            ..Self::new("sqlite::memory:")
        }
    }

    /// Reads `DATABASE_URL` plus the optional `DB_*` tuning variables.
    pub fn from_env() -> DbResult<Self> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| DbError::MissingUrl("DATABASE_URL".to_string()))?;
        let mut settings = Self::new(url);
        if let Some(max) = env_parse("DB_MAX_CONNECTIONS")? {
            settings.max_connections = max;
        }
        if let Some(min) = env_parse("DB_MIN_CONNECTIONS")? {
            settings.min_connections = min;
        }
        if let Some(timeout) = env_parse("DB_CONNECT_TIMEOUT_SECS")? {
            settings.connect_timeout_secs = timeout;
        }
        settings.sql_logging = std::env::var("DB_SQL_LOGGING")
            .ok()
            .map(|val| matches!(val.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(settings)
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(self.sql_logging);
        options
    }
}

fn env_parse<T: std::str::FromStr>(key: &'static str) -> DbResult<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DbError::InvalidSetting { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Open a pool for the given settings.
pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let pool = Database::connect(settings.connect_options())
        .await
        .map_err(DbError::Connect)?;
    debug!(
        backend = ?pool.get_database_backend(),
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Round-trips `SELECT 1` through the pool.
pub async fn ping(pool: &DbPool) -> Result<(), DbErr> {
    let backend = pool.get_database_backend();
    pool.execute(Statement::from_string(backend, "SELECT 1".to_string()))
        .await
        .map(|_| ())
}
