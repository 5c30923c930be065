use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Vehicle, VehicleType};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    pub driver_id: i64,

    pub vehicle_type: VehicleType,

    #[validate(length(min = 2, max = 20))]
    pub vehicle_number: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub driver_id: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub driver_id: i64,
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub model: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            driver_id: vehicle.driver_id,
            vehicle_type: vehicle.vehicle_type,
            vehicle_number: vehicle.vehicle_number,
            model: vehicle.model,
        }
    }
}
