use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Rating;
use crate::utils::validation::validate_rating;

// Request para valorar un viaje terminado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRatingRequest {
    pub ride_id: i64,

    #[validate(custom = "validate_rating")]
    pub rider_rating: Decimal,

    #[validate(custom = "validate_rating")]
    pub driver_rating: Decimal,

    #[validate(length(max = 1000))]
    pub rider_feedback: Option<String>,

    #[validate(length(max = 1000))]
    pub driver_feedback: Option<String>,
}

// Response de valoración
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: i64,
    pub ride_id: i64,
    pub rider_rating: Decimal,
    pub driver_rating: Decimal,
    pub rider_feedback: Option<String>,
    pub driver_feedback: Option<String>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            rider_rating: rating.rider_rating(),
            driver_rating: rating.driver_rating(),
            id: rating.id,
            ride_id: rating.ride_id,
            rider_feedback: rating.rider_feedback,
            driver_feedback: rating.driver_feedback,
        }
    }
}
