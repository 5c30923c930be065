use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{User, UserType};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        user_type: UserType,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, user_type, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(user_type)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Usuario {} creado ({})", user.id, user.user_type);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn list(&self, user_type: Option<UserType>) -> Result<Vec<User>, AppError> {
        let users = match user_type {
            Some(user_type) => {
                sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_type = ? ORDER BY id")
                    .bind(user_type)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(users)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0 != 0)
    }

    /// Borra el usuario. Falla con `ForeignKeyViolation` si algún vehículo
    /// o viaje lo referencia.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
