//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::errors::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://ride_booking.db";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(3600)),
        }
    }
}

impl DatabaseConfig {
    /// Leer la configuración desde `DATABASE_URL` y `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("DATABASE_URL") {
            config.url = url;
        }

        if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.max_connections = raw.parse().map_err(|_| {
                AppError::Config(format!("DATABASE_MAX_CONNECTIONS must be a number, got '{}'", raw))
            })?;
        }

        if config.is_in_memory() {
            return Ok(Self::in_memory());
        }

        Ok(config)
    }

    /// Base en memoria para tests.
    ///
    /// Cada conexión a `sqlite::memory:` abre una base distinta, así que el pool
    /// se limita a una única conexión que nunca se recicla.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: None,
            max_lifetime: None,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }

    /// Crear un nuevo pool de conexiones con las claves foráneas activadas
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_uses_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert!(config.is_in_memory());
        assert_eq!(config.max_connections, 1);
        assert!(config.idle_timeout.is_none());
    }

    #[test]
    fn test_default_points_to_file() {
        let config = DatabaseConfig::default();
        assert!(!config.is_in_memory());
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
    }

    #[tokio::test]
    async fn test_create_in_memory_pool() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();
        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
