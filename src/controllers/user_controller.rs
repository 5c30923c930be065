use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::models::UserType;
use crate::repositories::UserRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        // El UNIQUE de la tabla es la garantía; esto sólo da un mensaje más claro
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::UniqueViolation(format!(
                "users.email '{}' ya está registrado",
                request.email
            )));
        }

        let user = self
            .repository
            .create(
                request.name.trim(),
                &request.email,
                &request.phone,
                request.user_type,
            )
            .await?;

        tracing::info!("👤 Usuario {} creado como {}", user.id, user.user_type);

        Ok(ApiResponse::success_with_message(
            user.into(),
            "Usuario creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("User", id))?;

        Ok(user.into())
    }

    pub async fn list(&self, user_type: Option<UserType>) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list(user_type).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Rechazado si el usuario tiene vehículos o viajes (RESTRICT)
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("User", id));
        }

        tracing::info!("🗑️ Usuario {} eliminado", id);
        Ok(())
    }
}
