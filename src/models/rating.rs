//! Modelo de Rating
//!
//! Las puntuaciones se guardan en décimas (`rider_rating_x10` = 45 es 4.5).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::validation::{from_scaled, RATING_SCALE};

/// Rating principal - mapea exactamente a la tabla ratings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: i64,
    pub ride_id: i64,
    pub rider_rating_x10: i64,
    pub driver_rating_x10: i64,
    pub rider_feedback: Option<String>,
    pub driver_feedback: Option<String>,
}

impl Rating {
    pub fn rider_rating(&self) -> Decimal {
        from_scaled(self.rider_rating_x10, RATING_SCALE)
    }

    pub fn driver_rating(&self) -> Decimal {
        from_scaled(self.driver_rating_x10, RATING_SCALE)
    }
}
