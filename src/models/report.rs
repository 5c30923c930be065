//! Modelos de reportes
//!
//! Filas devueltas por las consultas de reporting. Los nombres de campo son
//! los nombres de columna expuestos por la API.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::{PaymentMode, RideStatus, UserType, VehicleType};

/// Usuarios por tipo
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct UserTypeCount {
    pub user_type: UserType,
    pub total_users: i64,
}

/// Driver con su vehículo; los campos de vehículo son `null` si no tiene ninguno
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct DriverVehicle {
    pub driver_id: i64,
    pub driver_name: String,
    pub vehicle_id: Option<i64>,
    pub vehicle_type: Option<VehicleType>,
    pub vehicle_number: Option<String>,
    pub model: Option<String>,
}

/// Rider sin ningún viaje
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct RiderWithoutRides {
    pub rider_id: i64,
    pub name: String,
    pub email: String,
}

/// Viajes por estado
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct RideStatusCount {
    pub status: RideStatus,
    pub total_rides: i64,
}

/// Medias de tarifa y distancia de los viajes completados
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletedRideAverages {
    pub avg_fare: Option<Decimal>,
    pub avg_distance: Option<Decimal>,
}

/// Driver con más viajes completados
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct TopDriver {
    pub driver_id: i64,
    pub driver_name: String,
    pub completed_rides: i64,
}

/// Punto de recogida más frecuente
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct PopularPickup {
    pub pickup_location: String,
    pub ride_count: i64,
}

/// Ingresos de los pagos completados
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalRevenue {
    pub total_revenue: Option<Decimal>,
}

/// Pago pendiente con el nombre del rider
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PendingPayment {
    pub payment_id: i64,
    pub ride_id: i64,
    pub rider_name: String,
    pub amount: Decimal,
    pub payment_mode: PaymentMode,
}

/// Driver con mejor media de `driver_rating`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopRatedDriver {
    pub driver_id: i64,
    pub driver_name: String,
    pub avg_driver_rating: Decimal,
}

/// Valoración con alguna puntuación por debajo de 3.5
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NegativeFeedback {
    pub ride_id: i64,
    pub rider_name: String,
    pub driver_name: String,
    pub rider_rating: Decimal,
    pub driver_rating: Decimal,
    pub rider_feedback: Option<String>,
    pub driver_feedback: Option<String>,
}
