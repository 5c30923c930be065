use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::rating_dto::{CreateRatingRequest, RatingResponse};
use crate::dto::ApiResponse;
use crate::repositories::{RatingRepository, RideRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{to_scaled, RATING_SCALE};

pub struct RatingController {
    repository: RatingRepository,
    rides: RideRepository,
}

impl RatingController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RatingRepository::new(pool.clone()),
            rides: RideRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRatingRequest,
    ) -> Result<ApiResponse<RatingResponse>, AppError> {
        request.validate()?;

        let ride = self
            .rides
            .find_by_id(request.ride_id)
            .await?
            .ok_or_else(|| not_found_error("Ride", request.ride_id))?;
        if !ride.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Ride {} está en {}; la valoración requiere un viaje terminado",
                ride.id, ride.status
            )));
        }

        let rating = self
            .repository
            .create(
                ride.id,
                to_scaled(request.rider_rating, RATING_SCALE)?,
                to_scaled(request.driver_rating, RATING_SCALE)?,
                non_blank(request.rider_feedback),
                non_blank(request.driver_feedback),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            rating.into(),
            "Valoración registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RatingResponse, AppError> {
        let rating = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rating", id))?;

        Ok(rating.into())
    }

    pub async fn list(&self) -> Result<Vec<RatingResponse>, AppError> {
        let ratings = self.repository.list().await?;
        Ok(ratings.into_iter().map(RatingResponse::from).collect())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
