//! Rutas HTTP
//!
//! Cada recurso expone su propio router; `create_app_router` los monta
//! bajo `/api` junto con CORS y trazas.

pub mod payment_routes;
pub mod rating_routes;
pub mod report_routes;
pub mod ride_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::database::ping;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/users", user_routes::create_user_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/rides", ride_routes::create_ride_router())
        .nest("/api/payments", payment_routes::create_payment_router())
        .nest("/api/ratings", rating_routes::create_rating_router())
        .nest("/api/reports", report_routes::create_report_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Estado del servicio y de la base de datos
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match ping(&state.pool).await {
        Ok(_) => "up",
        Err(e) => {
            tracing::error!("❌ Health check: base de datos no disponible: {}", e);
            "down"
        }
    };

    Json(json!({
        "service": "ride-booking",
        "status": if database == "up" { "healthy" } else { "degraded" },
        "database": database,
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
