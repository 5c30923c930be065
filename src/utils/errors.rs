//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Check constraint violated: {0}")]
    CheckViolation(String),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Código extendido de SQLite para `SQLITE_CONSTRAINT_FOREIGNKEY`
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
/// Código extendido de SQLite para `SQLITE_CONSTRAINT_TRIGGER`; es el que
/// devuelven las acciones `RESTRICT` al borrar o re-numerar una fila referenciada
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

/// Clasifica los errores de SQLx según el tipo de restricción violada.
///
/// El motor aborta la sentencia completa, así que no hay efecto parcial
/// que deshacer aquí.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_error) = &error else {
            return AppError::Database(error);
        };

        let message = db_error.message().to_string();
        let restrict_violation = match db_error.code().as_deref() {
            Some(SQLITE_CONSTRAINT_FOREIGNKEY) => true,
            Some(SQLITE_CONSTRAINT_TRIGGER) => message.starts_with("FOREIGN KEY constraint failed"),
            _ => false,
        };

        match db_error.kind() {
            ErrorKind::UniqueViolation => AppError::UniqueViolation(message),
            ErrorKind::ForeignKeyViolation => AppError::ForeignKeyViolation(message),
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                AppError::CheckViolation(message)
            }
            _ if restrict_violation => AppError::ForeignKeyViolation(message),
            _ => AppError::Database(error),
        }
    }
}

impl AppError {
    /// Código estable expuesto en el cuerpo de la respuesta
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::UniqueViolation(_) => "UNIQUE_VIOLATION",
            AppError::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            AppError::CheckViolation(_) => "CHECK_VIOLATION",
            AppError::Migration(_) => "MIGRATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidTransition(_) => "INVALID_TRANSITION",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UniqueViolation(_)
            | AppError::ForeignKeyViolation(_)
            | AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::CheckViolation(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Migration(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code().to_string();

        let (error, message, details) = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                (
                    "Database Error",
                    "An error occurred while accessing the database".to_string(),
                    Some(json!({ "sql_error": e.to_string() })),
                )
            }
            AppError::Migration(e) => {
                tracing::error!("❌ Migration error: {}", e);
                (
                    "Migration Error",
                    "The database schema could not be applied".to_string(),
                    Some(json!({ "migration_error": e.to_string() })),
                )
            }
            AppError::UniqueViolation(msg) => {
                tracing::warn!("⚠️ Unique violation: {}", msg);
                (
                    "Conflict",
                    "A row with the same unique value already exists".to_string(),
                    Some(json!({ "constraint": msg })),
                )
            }
            AppError::ForeignKeyViolation(msg) => {
                tracing::warn!("⚠️ Foreign key violation: {}", msg);
                (
                    "Conflict",
                    "The operation breaks a reference between rows".to_string(),
                    Some(json!({ "constraint": msg })),
                )
            }
            AppError::CheckViolation(msg) => {
                tracing::warn!("⚠️ Check violation: {}", msg);
                (
                    "Bad Request",
                    "A value is outside of its allowed domain".to_string(),
                    Some(json!({ "constraint": msg })),
                )
            }
            AppError::Validation(e) => {
                tracing::warn!("⚠️ Validation error: {}", e);
                (
                    "Validation Error",
                    "The provided data is invalid".to_string(),
                    Some(json!(e)),
                )
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                ("Not Found", msg, None)
            }
            AppError::InvalidTransition(msg) => {
                tracing::warn!("⚠️ Invalid transition: {}", msg);
                ("Conflict", msg, None)
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                ("Bad Request", msg, None)
            }
            AppError::Config(msg) => {
                tracing::error!("❌ Configuration error: {}", msg);
                (
                    "Internal Server Error",
                    "The service is misconfigured".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
            code,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
