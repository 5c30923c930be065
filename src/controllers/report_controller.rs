use sqlx::SqlitePool;

use crate::models::report::{
    CompletedRideAverages, DriverVehicle, NegativeFeedback, PendingPayment, PopularPickup,
    RideStatusCount, RiderWithoutRides, TopDriver, TopRatedDriver, TotalRevenue, UserTypeCount,
};
use crate::repositories::ReportRepository;
use crate::utils::errors::AppError;

/// Fachada de las once consultas de reporting
pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn user_counts_by_type(&self) -> Result<Vec<UserTypeCount>, AppError> {
        self.repository.user_counts_by_type().await
    }

    pub async fn drivers_with_vehicles(&self) -> Result<Vec<DriverVehicle>, AppError> {
        self.repository.drivers_with_vehicles().await
    }

    pub async fn riders_without_rides(&self) -> Result<Vec<RiderWithoutRides>, AppError> {
        self.repository.riders_without_rides().await
    }

    pub async fn ride_counts_by_status(&self) -> Result<Vec<RideStatusCount>, AppError> {
        self.repository.ride_counts_by_status().await
    }

    pub async fn completed_ride_averages(&self) -> Result<CompletedRideAverages, AppError> {
        self.repository.completed_ride_averages().await
    }

    pub async fn top_driver(&self) -> Result<Option<TopDriver>, AppError> {
        self.repository.top_driver_by_completed_rides().await
    }

    pub async fn popular_pickup(&self) -> Result<Option<PopularPickup>, AppError> {
        self.repository.most_popular_pickup().await
    }

    pub async fn total_revenue(&self) -> Result<TotalRevenue, AppError> {
        let revenue = self.repository.total_revenue().await?;
        tracing::debug!("Ingresos completados: {:?}", revenue.total_revenue);
        Ok(revenue)
    }

    pub async fn pending_payments(&self) -> Result<Vec<PendingPayment>, AppError> {
        self.repository.pending_payments().await
    }

    pub async fn top_rated_driver(&self) -> Result<Option<TopRatedDriver>, AppError> {
        self.repository.highest_rated_driver().await
    }

    pub async fn negative_feedback(&self) -> Result<Vec<NegativeFeedback>, AppError> {
        let rows = self.repository.negative_feedback().await?;
        if !rows.is_empty() {
            tracing::warn!("⚠️ {} valoraciones por debajo de 3.5", rows.len());
        }
        Ok(rows)
    }
}
