//! Configuración de conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y aplica el schema embebido
//! en `migrations/`.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::database::DatabaseConfig;
use crate::utils::errors::AppResult;

/// Migraciones embebidas en el binario
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Conexión a la base de datos compartida por la aplicación
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear la conexión a partir de la configuración
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        info!("🗄️ Conectando a la base de datos: {}", config.url);
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> AppResult<()> {
        run_migrations(&self.pool).await
    }

}

/// Verificar que la base responde
pub async fn ping(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Aplicar el schema sobre un pool existente
pub async fn run_migrations(pool: &SqlitePool) -> AppResult<()> {
    debug!("Aplicando {} migraciones", MIGRATOR.iter().count());
    MIGRATOR.run(pool).await?;
    info!("✅ Schema aplicado");
    Ok(())
}
