use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::ReportController;
use crate::models::report::{
    CompletedRideAverages, DriverVehicle, NegativeFeedback, PendingPayment, PopularPickup,
    RideStatusCount, RiderWithoutRides, TopDriver, TopRatedDriver, TotalRevenue, UserTypeCount,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Reportes de sólo lectura; los "top" devuelven `null` si no hay datos
pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/users-by-type", get(users_by_type))
        .route("/drivers-with-vehicles", get(drivers_with_vehicles))
        .route("/riders-without-rides", get(riders_without_rides))
        .route("/rides-by-status", get(rides_by_status))
        .route("/completed-ride-averages", get(completed_ride_averages))
        .route("/top-driver", get(top_driver))
        .route("/popular-pickup", get(popular_pickup))
        .route("/total-revenue", get(total_revenue))
        .route("/pending-payments", get(pending_payments))
        .route("/top-rated-driver", get(top_rated_driver))
        .route("/negative-feedback", get(negative_feedback))
}

async fn users_by_type(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserTypeCount>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.user_counts_by_type().await?))
}

async fn drivers_with_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverVehicle>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.drivers_with_vehicles().await?))
}

async fn riders_without_rides(
    State(state): State<AppState>,
) -> Result<Json<Vec<RiderWithoutRides>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.riders_without_rides().await?))
}

async fn rides_by_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<RideStatusCount>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.ride_counts_by_status().await?))
}

async fn completed_ride_averages(
    State(state): State<AppState>,
) -> Result<Json<CompletedRideAverages>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.completed_ride_averages().await?))
}

async fn top_driver(State(state): State<AppState>) -> Result<Json<Option<TopDriver>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.top_driver().await?))
}

async fn popular_pickup(
    State(state): State<AppState>,
) -> Result<Json<Option<PopularPickup>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.popular_pickup().await?))
}

async fn total_revenue(State(state): State<AppState>) -> Result<Json<TotalRevenue>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.total_revenue().await?))
}

async fn pending_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingPayment>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.pending_payments().await?))
}

async fn top_rated_driver(
    State(state): State<AppState>,
) -> Result<Json<Option<TopRatedDriver>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.top_rated_driver().await?))
}

async fn negative_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<NegativeFeedback>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.negative_feedback().await?))
}
