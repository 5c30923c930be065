//! Modelo de Ride
//!
//! Contiene el struct Ride, su estado y la máquina de estados del viaje.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;

use crate::utils::validation::{from_scaled, MONEY_SCALE};

/// Estado del viaje - mapea al CHECK de `rides.status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Requested,
    Ongoing,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Ongoing => "ongoing",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    /// `completed` y `cancelled` no admiten más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: RideStatus) -> bool {
        matches!(
            (self, next),
            (RideStatus::Requested, RideStatus::Ongoing)
                | (RideStatus::Requested, RideStatus::Cancelled)
                | (RideStatus::Ongoing, RideStatus::Completed)
                | (RideStatus::Ongoing, RideStatus::Cancelled)
        )
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ride principal - mapea exactamente a la tabla rides.
///
/// `fare_cents` guarda la tarifa en céntimos y `distance_dam` la distancia
/// en decámetros (km * 100).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
    pub id: i64,
    pub rider_id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub fare_cents: i64,
    pub distance_dam: i64,
    pub status: RideStatus,
    pub pickup_time: Option<DateTime<Utc>>,
    pub dropoff_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Ride {
    pub fn fare(&self) -> Decimal {
        from_scaled(self.fare_cents, MONEY_SCALE)
    }

    pub fn distance(&self) -> Decimal {
        from_scaled(self.distance_dam, MONEY_SCALE)
    }
}
