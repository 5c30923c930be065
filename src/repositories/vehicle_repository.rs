use sqlx::SqlitePool;

use crate::models::{Vehicle, VehicleType};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        driver_id: i64,
        vehicle_type: VehicleType,
        vehicle_number: &str,
        model: &str,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(driver_id)
        .bind(vehicle_type)
        .bind(vehicle_number)
        .bind(model)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self, driver_id: Option<i64>) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = match driver_id {
            Some(driver_id) => {
                sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE driver_id = ? ORDER BY id")
                    .bind(driver_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(vehicles)
    }

    pub async fn vehicle_number_exists(&self, vehicle_number: &str) -> Result<bool, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vehicle_number = ?)")
                .bind(vehicle_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0 != 0)
    }

    /// Falla con `ForeignKeyViolation` si algún viaje usa el vehículo
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
