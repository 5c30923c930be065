mod common;

use common::*;
use ride_booking::utils::errors::AppError;

fn classify(error: sqlx::Error) -> AppError {
    AppError::from(error)
}

#[tokio::test]
async fn test_user_type_must_be_rider_or_driver() {
    let pool = setup_pool().await;

    assert!(try_insert_user(&pool, "Ana Rider", "rider").await.is_ok());
    assert!(try_insert_user(&pool, "Ben Driver", "driver").await.is_ok());

    let error = try_insert_user(&pool, "Carl Admin", "admin").await.unwrap_err();
    assert!(matches!(classify(error), AppError::CheckViolation(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_email_and_phone_are_unique() {
    let pool = setup_pool().await;

    sqlx::query("INSERT INTO users (name, email, phone, user_type) VALUES ('A', 'a@x.com', '+100000001', 'rider')")
        .execute(&pool)
        .await
        .unwrap();

    let same_email = sqlx::query("INSERT INTO users (name, email, phone, user_type) VALUES ('B', 'a@x.com', '+100000002', 'rider')")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(same_email), AppError::UniqueViolation(_)));

    let same_phone = sqlx::query("INSERT INTO users (name, email, phone, user_type) VALUES ('C', 'c@x.com', '+100000001', 'driver')")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(same_phone), AppError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_vehicle_number_is_globally_unique() {
    let pool = setup_pool().await;
    let first = insert_user(&pool, "First Driver", "driver").await;
    let second = insert_user(&pool, "Second Driver", "driver").await;
    insert_vehicle(&pool, first, "KA01XY0001").await;

    let error = sqlx::query(
        "INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model) VALUES (?, 'suv', 'KA01XY0001', 'Creta')",
    )
    .bind(second)
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(matches!(classify(error), AppError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_enumerations_reject_unknown_values() {
    let pool = setup_pool().await;
    let (rider, driver, vehicle, ride) = single_ride(&pool, "completed").await;

    let bad_vehicle = sqlx::query(
        "INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model) VALUES (?, 'truck', 'TRK001', 'Tata')",
    )
    .bind(driver)
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(matches!(classify(bad_vehicle), AppError::CheckViolation(_)));

    let bad_status = try_insert_ride(
        &pool,
        &RideFixture {
            rider_id: rider,
            driver_id: driver,
            vehicle_id: vehicle,
            pickup: "Downtown",
            fare_cents: 100,
            distance_dam: 100,
            status: "teleported",
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(classify(bad_status), AppError::CheckViolation(_)));

    let bad_mode = sqlx::query("INSERT INTO payments (ride_id, amount_cents, payment_mode) VALUES (?, 100, 'cheque')")
        .bind(ride)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(bad_mode), AppError::CheckViolation(_)));
}

#[tokio::test]
async fn test_payment_status_defaults_to_pending() {
    let pool = setup_pool().await;
    let (_, _, _, ride) = single_ride(&pool, "completed").await;

    let (status,): (String,) = sqlx::query_as(
        "INSERT INTO payments (ride_id, amount_cents, payment_mode) VALUES (?, 1000, 'wallet') RETURNING status",
    )
    .bind(ride)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(status, "pending");
}

#[tokio::test]
async fn test_negative_fare_and_distance_are_rejected() {
    let pool = setup_pool().await;
    let (rider, driver, vehicle, _) = single_ride(&pool, "requested").await;

    for (fare_cents, distance_dam) in [(-1, 100), (100, -1)] {
        let error = try_insert_ride(
            &pool,
            &RideFixture {
                rider_id: rider,
                driver_id: driver,
                vehicle_id: vehicle,
                pickup: "Downtown",
                fare_cents,
                distance_dam,
                status: "requested",
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(classify(error), AppError::CheckViolation(_)));
    }
}

#[tokio::test]
async fn test_rating_bounds_are_inclusive() {
    let pool = setup_pool().await;
    let rider = insert_user(&pool, "Rating Rider", "rider").await;
    let driver = insert_user(&pool, "Rating Driver", "driver").await;
    let vehicle = insert_vehicle(&pool, driver, "RATE0001").await;

    let mut rides = Vec::new();
    for _ in 0..4 {
        rides.push(
            insert_ride(
                &pool,
                RideFixture {
                    rider_id: rider,
                    driver_id: driver,
                    vehicle_id: vehicle,
                    pickup: "Park",
                    fare_cents: 500,
                    distance_dam: 200,
                    status: "completed",
                },
            )
            .await,
        );
    }

    // 1.0 y 5.0 son válidos
    assert!(try_insert_rating(&pool, rides[0], 10, 50).await.is_ok());
    assert!(try_insert_rating(&pool, rides[1], 50, 10).await.is_ok());

    // 0.9 y 5.1 no
    let too_low = try_insert_rating(&pool, rides[2], 9, 40).await.unwrap_err();
    assert!(matches!(classify(too_low), AppError::CheckViolation(_)));
    let too_high = try_insert_rating(&pool, rides[3], 40, 51).await.unwrap_err();
    assert!(matches!(classify(too_high), AppError::CheckViolation(_)));
}

#[tokio::test]
async fn test_one_payment_and_one_rating_per_ride() {
    let pool = setup_pool().await;
    let (_, _, _, ride) = single_ride(&pool, "completed").await;

    try_insert_payment(&pool, ride, 1000, "completed").await.unwrap();
    let second_payment = try_insert_payment(&pool, ride, 1000, "pending").await.unwrap_err();
    assert!(matches!(classify(second_payment), AppError::UniqueViolation(_)));

    try_insert_rating(&pool, ride, 45, 45).await.unwrap();
    let second_rating = try_insert_rating(&pool, ride, 30, 30).await.unwrap_err();
    assert!(matches!(classify(second_rating), AppError::UniqueViolation(_)));
}

#[tokio::test]
async fn test_references_must_exist() {
    let pool = setup_pool().await;
    let (rider, driver, vehicle, _) = single_ride(&pool, "completed").await;

    let missing_rider = try_insert_ride(
        &pool,
        &RideFixture {
            rider_id: rider + 1000,
            driver_id: driver,
            vehicle_id: vehicle,
            pickup: "Nowhere",
            fare_cents: 100,
            distance_dam: 100,
            status: "requested",
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(classify(missing_rider), AppError::ForeignKeyViolation(_)));

    let missing_ride = try_insert_payment(&pool, 9999, 100, "pending").await.unwrap_err();
    assert!(matches!(classify(missing_ride), AppError::ForeignKeyViolation(_)));

    let missing_driver = sqlx::query(
        "INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model) VALUES (4242, 'bike', 'BIKE01', 'Pulsar')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert!(matches!(classify(missing_driver), AppError::ForeignKeyViolation(_)));
}

#[tokio::test]
async fn test_referenced_rows_cannot_be_deleted_or_renumbered() {
    let pool = setup_pool().await;
    let (rider, driver, vehicle, ride) = single_ride(&pool, "completed").await;

    let delete_rider = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(rider)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(delete_rider), AppError::ForeignKeyViolation(_)));

    let delete_vehicle = sqlx::query("DELETE FROM vehicles WHERE id = ?")
        .bind(vehicle)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(delete_vehicle), AppError::ForeignKeyViolation(_)));

    let renumber_driver = sqlx::query("UPDATE users SET id = 5000 WHERE id = ?")
        .bind(driver)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(renumber_driver), AppError::ForeignKeyViolation(_)));

    try_insert_payment(&pool, ride, 1000, "completed").await.unwrap();
    let delete_ride = sqlx::query("DELETE FROM rides WHERE id = ?")
        .bind(ride)
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(matches!(classify(delete_ride), AppError::ForeignKeyViolation(_)));

    // Nada se ha borrado
    let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 2);
}

#[tokio::test]
async fn test_unreferenced_user_can_be_deleted() {
    let pool = setup_pool().await;
    let lonely = insert_user(&pool, "Lonely Rider", "rider").await;

    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(lonely)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(result.rows_affected(), 1);
}

#[tokio::test]
async fn test_restrict_violation_is_reported_as_conflict() {
    let pool = setup_pool().await;
    let (rider, _, vehicle, _) = single_ride(&pool, "requested").await;

    for sql in ["DELETE FROM users WHERE id = ?", "DELETE FROM vehicles WHERE id = ?"] {
        let id = if sql.contains("users") { rider } else { vehicle };
        let error = classify(sqlx::query(sql).bind(id).execute(&pool).await.unwrap_err());
        assert_eq!(error.code(), "FOREIGN_KEY_VIOLATION");
        assert_eq!(error.status_code(), axum::http::StatusCode::CONFLICT);
    }
}
