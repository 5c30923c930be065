use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};

use crate::controllers::RideController;
use crate::dto::ride_dto::{CreateRideRequest, RideFilters, RideResponse, UpdateRideStatusRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rides).post(create_ride))
        .route("/:id", get(get_ride))
        .route("/:id/status", patch(update_ride_status))
}

async fn create_ride(
    State(state): State<AppState>,
    Json(request): Json<CreateRideRequest>,
) -> Result<Json<ApiResponse<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_rides(
    State(state): State<AppState>,
    Query(filters): Query<RideFilters>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.list(filters.status).await?;
    Ok(Json(response))
}

async fn update_ride_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRideStatusRequest>,
) -> Result<Json<ApiResponse<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.update_status(id, request.status).await?;
    Ok(Json(response))
}
