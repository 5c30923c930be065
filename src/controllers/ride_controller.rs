use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::ride_dto::{CreateRideRequest, RideResponse};
use crate::dto::ApiResponse;
use crate::models::RideStatus;
use crate::repositories::{NewRide, RideRepository, UserRepository, VehicleRepository};
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use crate::utils::validation::{to_scaled, MONEY_SCALE};

pub struct RideController {
    repository: RideRepository,
    users: UserRepository,
    vehicles: VehicleRepository,
}

impl RideController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RideRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRideRequest,
    ) -> Result<ApiResponse<RideResponse>, AppError> {
        request.validate()?;

        let rider = self
            .users
            .find_by_id(request.rider_id)
            .await?
            .ok_or_else(|| not_found_error("User", request.rider_id))?;
        if !rider.is_rider() {
            return Err(bad_request_error("rider_id debe referenciar a un rider"));
        }

        let driver = self
            .users
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("User", request.driver_id))?;
        if !driver.is_driver() {
            return Err(bad_request_error("driver_id debe referenciar a un driver"));
        }

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;
        if vehicle.driver_id != driver.id {
            return Err(bad_request_error("El vehículo no pertenece al driver indicado"));
        }

        let new_ride = NewRide {
            rider_id: rider.id,
            driver_id: driver.id,
            vehicle_id: vehicle.id,
            pickup_location: request.pickup_location.trim().to_string(),
            dropoff_location: request.dropoff_location.trim().to_string(),
            fare_cents: to_scaled(request.fare, MONEY_SCALE)?,
            distance_dam: to_scaled(request.distance, MONEY_SCALE)?,
        };

        let ride = self.repository.create(new_ride).await?;
        tracing::info!("🛺 Viaje {} solicitado por rider {}", ride.id, ride.rider_id);

        Ok(ApiResponse::success_with_message(
            ride.into(),
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RideResponse, AppError> {
        let ride = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ride", id))?;

        Ok(ride.into())
    }

    pub async fn list(&self, status: Option<RideStatus>) -> Result<Vec<RideResponse>, AppError> {
        let rides = self.repository.list(status).await?;
        Ok(rides.into_iter().map(RideResponse::from).collect())
    }

    /// Avanza el viaje en su ciclo de vida.
    ///
    /// `ongoing` fija `pickup_time`; `completed` fija `dropoff_time` y
    /// `completed_at`.
    pub async fn update_status(
        &self,
        id: i64,
        next: RideStatus,
    ) -> Result<ApiResponse<RideResponse>, AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ride", id))?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "Ride {} no puede pasar de {} a {}",
                id, current.status, next
            )));
        }

        let now = Utc::now();
        let (pickup_time, dropoff_time, completed_at) = match next {
            RideStatus::Ongoing => (Some(now), None, None),
            RideStatus::Completed => (None, Some(now), Some(now)),
            _ => (None, None, None),
        };

        let ride = self
            .repository
            .update_status(id, current.status, next, pickup_time, dropoff_time, completed_at)
            .await?
            .ok_or_else(|| {
                AppError::InvalidTransition(format!(
                    "Ride {} cambió de estado durante la operación",
                    id
                ))
            })?;

        tracing::info!("🔄 Viaje {}: {} -> {}", id, current.status, ride.status);

        Ok(ApiResponse::success_with_message(
            ride.into(),
            format!("Viaje actualizado a {}", next),
        ))
    }
}
