use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::repositories::{UserRepository, VehicleRepository};
use crate::utils::errors::{bad_request_error, not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
    users: UserRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle_number = request.vehicle_number.trim().to_uppercase();

        // Verificar que el propietario existe y es driver
        let owner = self
            .users
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| not_found_error("User", request.driver_id))?;
        if !owner.is_driver() {
            return Err(bad_request_error("El propietario del vehículo debe ser un driver"));
        }

        // Verificar que la matrícula no exista
        if self.repository.vehicle_number_exists(&vehicle_number).await? {
            return Err(AppError::UniqueViolation(format!(
                "vehicles.vehicle_number '{}' ya está registrada",
                vehicle_number
            )));
        }

        let vehicle = self
            .repository
            .create(
                request.driver_id,
                request.vehicle_type,
                &vehicle_number,
                request.model.trim(),
            )
            .await?;

        tracing::info!(
            "🚗 Vehículo {} registrado para driver {}",
            vehicle.id,
            vehicle.driver_id
        );

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self, driver_id: Option<i64>) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list(driver_id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Rechazado si algún viaje usa el vehículo (RESTRICT)
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle", id));
        }
        Ok(())
    }
}
