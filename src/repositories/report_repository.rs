//! Consultas de reporting
//!
//! Todas son de sólo lectura. Los agregados sobre importes se hacen con
//! enteros escalados en SQL y el redondeo a 2 decimales en Rust, para que
//! las medias sean exactas.
//!
//! Empates en los "top 1": gana la clave menor (`driver_id` o
//! `pickup_location`).

use sqlx::SqlitePool;

use crate::models::report::{
    CompletedRideAverages, DriverVehicle, NegativeFeedback, PendingPayment, PopularPickup,
    RideStatusCount, RiderWithoutRides, TopDriver, TopRatedDriver, TotalRevenue, UserTypeCount,
};
use crate::models::PaymentMode;
use crate::utils::errors::AppError;
use crate::utils::validation::{average_scaled, from_scaled, MONEY_SCALE, RATING_SCALE};

// (ride_id, rider, driver, rider_x10, driver_x10, rider_feedback, driver_feedback)
type NegativeFeedbackRow = (i64, String, String, i64, i64, Option<String>, Option<String>);

pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 1. Usuarios por tipo
    pub async fn user_counts_by_type(&self) -> Result<Vec<UserTypeCount>, AppError> {
        let rows = sqlx::query_as::<_, UserTypeCount>(
            r#"
            SELECT user_type, COUNT(*) AS total_users
            FROM users
            GROUP BY user_type
            ORDER BY total_users DESC, user_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// 2. Drivers con sus vehículos (LEFT JOIN: drivers sin vehículo incluidos)
    pub async fn drivers_with_vehicles(&self) -> Result<Vec<DriverVehicle>, AppError> {
        let rows = sqlx::query_as::<_, DriverVehicle>(
            r#"
            SELECT u.id AS driver_id,
                   u.name AS driver_name,
                   v.id AS vehicle_id,
                   v.vehicle_type,
                   v.vehicle_number,
                   v.model
            FROM users u
            LEFT JOIN vehicles v ON v.driver_id = u.id
            WHERE u.user_type = 'driver'
            ORDER BY u.id, v.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// 3. Riders sin ningún viaje (anti-join)
    pub async fn riders_without_rides(&self) -> Result<Vec<RiderWithoutRides>, AppError> {
        let rows = sqlx::query_as::<_, RiderWithoutRides>(
            r#"
            SELECT u.id AS rider_id, u.name, u.email
            FROM users u
            LEFT JOIN rides r ON r.rider_id = u.id
            WHERE u.user_type = 'rider' AND r.id IS NULL
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// 4. Viajes por estado
    pub async fn ride_counts_by_status(&self) -> Result<Vec<RideStatusCount>, AppError> {
        let rows = sqlx::query_as::<_, RideStatusCount>(
            r#"
            SELECT status, COUNT(*) AS total_rides
            FROM rides
            GROUP BY status
            ORDER BY total_rides DESC, status
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// 5. Tarifa y distancia medias de los viajes completados
    pub async fn completed_ride_averages(&self) -> Result<CompletedRideAverages, AppError> {
        let (count, fare_sum, distance_sum): (i64, Option<i64>, Option<i64>) = sqlx::query_as(
            r#"
            SELECT COUNT(*), SUM(fare_cents), SUM(distance_dam)
            FROM rides
            WHERE status = 'completed'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CompletedRideAverages {
            avg_fare: fare_sum.and_then(|sum| average_scaled(sum, count, MONEY_SCALE)),
            avg_distance: distance_sum.and_then(|sum| average_scaled(sum, count, MONEY_SCALE)),
        })
    }

    /// 6. Driver con más viajes completados
    pub async fn top_driver_by_completed_rides(&self) -> Result<Option<TopDriver>, AppError> {
        let row = sqlx::query_as::<_, TopDriver>(
            r#"
            SELECT r.driver_id, u.name AS driver_name, COUNT(*) AS completed_rides
            FROM rides r
            JOIN users u ON u.id = r.driver_id
            WHERE r.status = 'completed'
            GROUP BY r.driver_id, u.name
            ORDER BY completed_rides DESC, r.driver_id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// 7. Punto de recogida más popular, sobre todos los viajes
    pub async fn most_popular_pickup(&self) -> Result<Option<PopularPickup>, AppError> {
        let row = sqlx::query_as::<_, PopularPickup>(
            r#"
            SELECT pickup_location, COUNT(*) AS ride_count
            FROM rides
            GROUP BY pickup_location
            ORDER BY ride_count DESC, pickup_location ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// 8. Ingresos totales de pagos completados (`None` si no hay ninguno)
    pub async fn total_revenue(&self) -> Result<TotalRevenue, AppError> {
        let (sum,): (Option<i64>,) =
            sqlx::query_as("SELECT SUM(amount_cents) FROM payments WHERE status = 'completed'")
                .fetch_one(&self.pool)
                .await?;

        Ok(TotalRevenue {
            total_revenue: sum.map(|cents| from_scaled(cents, MONEY_SCALE)),
        })
    }

    /// 9. Pagos pendientes con el nombre del rider
    pub async fn pending_payments(&self) -> Result<Vec<PendingPayment>, AppError> {
        let rows: Vec<(i64, i64, String, i64, PaymentMode)> = sqlx::query_as(
            r#"
            SELECT p.id, p.ride_id, u.name, p.amount_cents, p.payment_mode
            FROM payments p
            JOIN rides r ON r.id = p.ride_id
            JOIN users u ON u.id = r.rider_id
            WHERE p.status = 'pending'
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(payment_id, ride_id, rider_name, amount_cents, payment_mode)| PendingPayment {
                payment_id,
                ride_id,
                rider_name,
                amount: from_scaled(amount_cents, MONEY_SCALE),
                payment_mode,
            })
            .collect())
    }

    /// 10. Driver con mejor media de `driver_rating`, redondeada a 2 decimales.
    ///
    /// La comparación se hace sobre la media ya redondeada, como la columna
    /// que se devuelve.
    pub async fn highest_rated_driver(&self) -> Result<Option<TopRatedDriver>, AppError> {
        let rows: Vec<(i64, String, i64, i64)> = sqlx::query_as(
            r#"
            SELECT r.driver_id, u.name, SUM(rt.driver_rating_x10), COUNT(*)
            FROM ratings rt
            JOIN rides r ON r.id = rt.ride_id
            JOIN users u ON u.id = r.driver_id
            GROUP BY r.driver_id, u.name
            ORDER BY r.driver_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut best: Option<TopRatedDriver> = None;
        for (driver_id, driver_name, sum, count) in rows {
            let Some(avg_driver_rating) = average_scaled(sum, count, RATING_SCALE) else {
                continue;
            };
            let is_better = best
                .as_ref()
                .map_or(true, |current| avg_driver_rating > current.avg_driver_rating);
            if is_better {
                best = Some(TopRatedDriver {
                    driver_id,
                    driver_name,
                    avg_driver_rating,
                });
            }
        }

        Ok(best)
    }

    /// 11. Valoraciones con rider_rating o driver_rating por debajo de 3.5
    pub async fn negative_feedback(&self) -> Result<Vec<NegativeFeedback>, AppError> {
        let rows: Vec<NegativeFeedbackRow> = sqlx::query_as(
            r#"
            SELECT rt.ride_id,
                   rider.name,
                   driver.name,
                   rt.rider_rating_x10,
                   rt.driver_rating_x10,
                   rt.rider_feedback,
                   rt.driver_feedback
            FROM ratings rt
            JOIN rides r ON r.id = rt.ride_id
            JOIN users rider ON rider.id = r.rider_id
            JOIN users driver ON driver.id = r.driver_id
            WHERE rt.rider_rating_x10 < 35 OR rt.driver_rating_x10 < 35
            ORDER BY rt.ride_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| NegativeFeedback {
                ride_id: row.0,
                rider_name: row.1,
                driver_name: row.2,
                rider_rating: from_scaled(row.3, RATING_SCALE),
                driver_rating: from_scaled(row.4, RATING_SCALE),
                rider_feedback: row.5,
                driver_feedback: row.6,
            })
            .collect())
    }
}
