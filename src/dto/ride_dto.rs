use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Ride, RideStatus};
use crate::utils::validation::{validate_non_negative, validate_not_empty};

// Request para crear un viaje; el estado inicial es siempre `requested`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRideRequest {
    pub rider_id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,

    #[validate(length(max = 255), custom = "validate_not_empty")]
    pub pickup_location: String,

    #[validate(length(max = 255), custom = "validate_not_empty")]
    pub dropoff_location: String,

    #[validate(custom = "validate_non_negative")]
    pub fare: Decimal,

    #[validate(custom = "validate_non_negative")]
    pub distance: Decimal,
}

// Request para cambiar el estado de un viaje
#[derive(Debug, Deserialize)]
pub struct UpdateRideStatusRequest {
    pub status: RideStatus,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct RideFilters {
    pub status: Option<RideStatus>,
}

// Response de viaje
#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub id: i64,
    pub rider_id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub fare: Decimal,
    pub distance: Decimal,
    pub status: RideStatus,
    pub pickup_time: Option<DateTime<Utc>>,
    pub dropoff_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Ride> for RideResponse {
    fn from(ride: Ride) -> Self {
        Self {
            fare: ride.fare(),
            distance: ride.distance(),
            id: ride.id,
            rider_id: ride.rider_id,
            driver_id: ride.driver_id,
            vehicle_id: ride.vehicle_id,
            pickup_location: ride.pickup_location,
            dropoff_location: ride.dropoff_location,
            status: ride.status,
            pickup_time: ride.pickup_time,
            dropoff_time: ride.dropoff_time,
            created_at: ride.created_at,
            completed_at: ride.completed_at,
        }
    }
}
