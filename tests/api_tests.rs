mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use ride_booking::config::EnvironmentConfig;
use ride_booking::database::seed::seed_sample_data;
use ride_booking::routes::create_app_router;
use ride_booking::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

// Función helper para crear la app de test sobre una base en memoria
async fn create_test_app() -> Router {
    let pool = common::setup_pool().await;
    create_app_router(AppState::new(pool, EnvironmentConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn create_user(app: &Router, name: &str, phone: &str, user_type: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/users",
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "phone": phone,
            "user_type": user_type
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "ride-booking");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_create_and_fetch_user() {
    let app = create_test_app().await;
    let id = create_user(&app, "Nila", "+91 91111 00001", "rider").await;

    let (status, body) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nila");
    assert_eq!(body["user_type"], "rider");

    let (status, body) = get(&app, "/api/users?user_type=driver").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict() {
    let app = create_test_app().await;
    create_user(&app, "Nila", "+91 91111 00001", "rider").await;

    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "name": "Nila Two",
            "email": "nila@example.com",
            "phone": "+91 91111 00002",
            "user_type": "rider"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "UNIQUE_VIOLATION");
}

#[tokio::test]
async fn test_invalid_email_returns_bad_request() {
    let app = create_test_app().await;
    let (status, body) = post(
        &app,
        "/api/users",
        json!({
            "name": "Broken",
            "email": "broken-at-example.com",
            "phone": "+91 91111 00003",
            "user_type": "rider"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_user_type_is_rejected() {
    let app = create_test_app().await;
    let (status, _) = post(
        &app,
        "/api/users",
        json!({
            "name": "Root",
            "email": "root@example.com",
            "phone": "+91 91111 00004",
            "user_type": "admin"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_resources_return_not_found() {
    let app = create_test_app().await;
    for uri in ["/api/users/99", "/api/vehicles/99", "/api/rides/99", "/api/payments/99", "/api/ratings/99"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_full_booking_flow() {
    let app = create_test_app().await;
    let rider = create_user(&app, "Ravi", "+91 92222 00001", "rider").await;
    let driver = create_user(&app, "Lata", "+91 92222 00002", "driver").await;

    let (status, body) = post(
        &app,
        "/api/vehicles",
        json!({
            "driver_id": driver,
            "vehicle_type": "suv",
            "vehicle_number": "ka03mn4455",
            "model": "Mahindra XUV"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["vehicle_number"], "KA03MN4455");
    let vehicle = body["data"]["id"].as_i64().unwrap();

    let (status, body) = post(
        &app,
        "/api/rides",
        json!({
            "rider_id": rider,
            "driver_id": driver,
            "vehicle_id": vehicle,
            "pickup_location": "Jayanagar",
            "dropoff_location": "Hebbal",
            "fare": "250.00",
            "distance": "18.4"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["status"], "requested");
    assert_eq!(body["data"]["fare"], "250.00");
    let ride = body["data"]["id"].as_i64().unwrap();

    let status_uri = format!("/api/rides/{}/status", ride);
    for next in ["ongoing", "completed"] {
        let (status, body) = send(&app, Method::PATCH, &status_uri, Some(json!({ "status": next }))).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["data"]["status"], next);
    }

    let (status, body) = post(
        &app,
        "/api/payments",
        json!({ "ride_id": ride, "amount": "250.00", "payment_mode": "wallet" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["status"], "pending");
    let payment = body["data"]["id"].as_i64().unwrap();

    let (_, pending) = get(&app, "/api/reports/pending-payments").await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["rider_name"], "Ravi");

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/payments/{}/status", payment),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/api/ratings",
        json!({
            "ride_id": ride,
            "rider_rating": "4.5",
            "driver_rating": "3.0",
            "driver_feedback": "Music too loud"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let (_, revenue) = get(&app, "/api/reports/total-revenue").await;
    assert_eq!(revenue["total_revenue"], "250.00");

    let (_, negative) = get(&app, "/api/reports/negative-feedback").await;
    assert_eq!(negative[0]["driver_name"], "Lata");
    assert_eq!(negative[0]["driver_feedback"], "Music too loud");

    let (_, top) = get(&app, "/api/reports/top-driver").await;
    assert_eq!(top["driver_id"], driver);
    assert_eq!(top["completed_rides"], 1);
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let app = create_test_app().await;
    let (status, body) = post(
        &app,
        "/api/ratings",
        json!({ "ride_id": 1, "rider_rating": "5.1", "driver_rating": "4.0" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_ride_transition_returns_conflict() {
    let app = create_test_app().await;
    let rider = create_user(&app, "Ravi", "+91 92222 00001", "rider").await;
    let driver = create_user(&app, "Lata", "+91 92222 00002", "driver").await;
    let (_, body) = post(
        &app,
        "/api/vehicles",
        json!({ "driver_id": driver, "vehicle_type": "bike", "vehicle_number": "KA01BK0001", "model": "Pulsar" }),
    )
    .await;
    let vehicle = body["data"]["id"].as_i64().unwrap();
    let (_, body) = post(
        &app,
        "/api/rides",
        json!({
            "rider_id": rider,
            "driver_id": driver,
            "vehicle_id": vehicle,
            "pickup_location": "Church Street",
            "dropoff_location": "Domlur",
            "fare": "90",
            "distance": "4.2"
        }),
    )
    .await;
    let ride = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/rides/{}/status", ride),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_TRANSITION");

    // Un driver con viajes no se puede borrar
    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{}", driver), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FOREIGN_KEY_VIOLATION");
}

#[tokio::test]
async fn test_reports_over_sample_data() {
    let pool = common::setup_pool().await;
    seed_sample_data(&pool).await.unwrap();
    let app = create_app_router(AppState::new(pool, EnvironmentConfig::default()));

    let (status, averages) = get(&app, "/api/reports/completed-ride-averages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(averages["avg_fare"], "306.83");
    assert_eq!(averages["avg_distance"], "20.12");

    let (_, by_type) = get(&app, "/api/reports/users-by-type").await;
    assert_eq!(by_type, json!([
        { "user_type": "driver", "total_users": 3 },
        { "user_type": "rider", "total_users": 3 }
    ]));

    let (_, drivers) = get(&app, "/api/reports/drivers-with-vehicles").await;
    assert_eq!(drivers[2]["vehicle_id"], Value::Null);

    let (_, idle) = get(&app, "/api/reports/riders-without-rides").await;
    assert_eq!(idle[0]["name"], "Rahul Verma");

    let (_, statuses) = get(&app, "/api/reports/rides-by-status").await;
    assert_eq!(statuses[0], json!({ "status": "completed", "total_rides": 3 }));

    let (_, pickup) = get(&app, "/api/reports/popular-pickup").await;
    assert_eq!(pickup, json!({ "pickup_location": "MG Road", "ride_count": 3 }));

    let (_, best) = get(&app, "/api/reports/top-rated-driver").await;
    assert_eq!(best["driver_name"], "Sunil Kumar");
    assert_eq!(best["avg_driver_rating"], "4.35");
}

#[tokio::test]
async fn test_reports_on_empty_database() {
    let app = create_test_app().await;

    let (status, top) = get(&app, "/api/reports/top-driver").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(top, Value::Null);

    let (_, revenue) = get(&app, "/api/reports/total-revenue").await;
    assert_eq!(revenue, json!({ "total_revenue": null }));
}
