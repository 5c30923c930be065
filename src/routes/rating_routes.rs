use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::RatingController;
use crate::dto::rating_dto::{CreateRatingRequest, RatingResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rating_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ratings).post(create_rating))
        .route("/:id", get(get_rating))
}

async fn create_rating(
    State(state): State<AppState>,
    Json(request): Json<CreateRatingRequest>,
) -> Result<Json<ApiResponse<RatingResponse>>, AppError> {
    let controller = RatingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RatingResponse>, AppError> {
    let controller = RatingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_ratings(
    State(state): State<AppState>,
) -> Result<Json<Vec<RatingResponse>>, AppError> {
    let controller = RatingController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
