use sqlx::SqlitePool;

use crate::models::Rating;
use crate::utils::errors::AppError;

pub struct RatingRepository {
    pool: SqlitePool,
}

impl RatingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Puntuaciones en décimas; el CHECK de la tabla rechaza valores fuera de 10..=50
    pub async fn create(
        &self,
        ride_id: i64,
        rider_rating_x10: i64,
        driver_rating_x10: i64,
        rider_feedback: Option<String>,
        driver_feedback: Option<String>,
    ) -> Result<Rating, AppError> {
        let rating = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (ride_id, rider_rating_x10, driver_rating_x10, rider_feedback, driver_feedback)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(ride_id)
        .bind(rider_rating_x10)
        .bind(driver_rating_x10)
        .bind(rider_feedback)
        .bind(driver_feedback)
        .fetch_one(&self.pool)
        .await?;

        Ok(rating)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Rating>, AppError> {
        let rating = sqlx::query_as::<_, Rating>("SELECT * FROM ratings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rating)
    }

    pub async fn list(&self) -> Result<Vec<Rating>, AppError> {
        let ratings = sqlx::query_as::<_, Rating>("SELECT * FROM ratings ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ratings)
    }
}
