use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{Ride, RideStatus};
use crate::utils::errors::AppError;

/// Datos ya validados y escalados para insertar un viaje
#[derive(Debug, Clone)]
pub struct NewRide {
    pub rider_id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub fare_cents: i64,
    pub distance_dam: i64,
}

pub struct RideRepository {
    pool: SqlitePool,
}

impl RideRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserta el viaje en estado `requested`
    pub async fn create(&self, ride: NewRide) -> Result<Ride, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                rider_id, driver_id, vehicle_id, pickup_location, dropoff_location,
                fare_cents, distance_dam, status, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(ride.rider_id)
        .bind(ride.driver_id)
        .bind(ride.vehicle_id)
        .bind(ride.pickup_location)
        .bind(ride.dropoff_location)
        .bind(ride.fare_cents)
        .bind(ride.distance_dam)
        .bind(RideStatus::Requested)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(ride)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ride)
    }

    pub async fn list(&self, status: Option<RideStatus>) -> Result<Vec<Ride>, AppError> {
        let rides = match status {
            Some(status) => {
                sqlx::query_as::<_, Ride>("SELECT * FROM rides WHERE status = ? ORDER BY id")
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, Ride>("SELECT * FROM rides ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rides)
    }

    /// Cambia el estado sólo si el viaje sigue en `from`.
    ///
    /// Devuelve `None` si otro cambio se adelantó. Los timestamps a `None`
    /// conservan el valor actual.
    pub async fn update_status(
        &self,
        id: i64,
        from: RideStatus,
        to: RideStatus,
        pickup_time: Option<DateTime<Utc>>,
        dropoff_time: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Ride>, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET status = ?,
                pickup_time = COALESCE(?, pickup_time),
                dropoff_time = COALESCE(?, dropoff_time),
                completed_at = COALESCE(?, completed_at)
            WHERE id = ? AND status = ?
            RETURNING *
            "#,
        )
        .bind(to)
        .bind(pickup_time)
        .bind(dropoff_time)
        .bind(completed_at)
        .bind(id)
        .bind(from)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ride)
    }
}
