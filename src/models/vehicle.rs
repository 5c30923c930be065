//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su tipo.
//! Mapea exactamente al schema SQLite con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de vehículo - mapea al CHECK de `vehicles.vehicle_type`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Sedan,
    Suv,
    Hatchback,
    Bike,
}

/// Vehicle principal - cada vehículo pertenece a un driver
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub driver_id: i64,
    pub vehicle_type: VehicleType,
    pub vehicle_number: String,
    pub model: String,
}
