#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use ride_booking::config::DatabaseConfig;
use ride_booking::database::run_migrations;
use sqlx::SqlitePool;

static PHONE_SEQUENCE: AtomicUsize = AtomicUsize::new(1);

// Helper function to create an in-memory database with the real schema
pub async fn setup_pool() -> SqlitePool {
    let pool = DatabaseConfig::in_memory()
        .create_pool()
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

fn email_for(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', "."))
}

fn next_phone() -> String {
    format!("+1555{:07}", PHONE_SEQUENCE.fetch_add(1, Ordering::SeqCst))
}

pub async fn try_insert_user(
    pool: &SqlitePool,
    name: &str,
    user_type: &str,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (name, email, phone, user_type) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(email_for(name))
    .bind(next_phone())
    .bind(user_type)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_user(pool: &SqlitePool, name: &str, user_type: &str) -> i64 {
    try_insert_user(pool, name, user_type).await.expect("insert user")
}

pub async fn insert_vehicle(pool: &SqlitePool, driver_id: i64, vehicle_number: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model) VALUES (?, 'sedan', ?, 'Swift Dzire') RETURNING id",
    )
    .bind(driver_id)
    .bind(vehicle_number)
    .fetch_one(pool)
    .await
    .expect("insert vehicle");
    id
}

pub struct RideFixture<'a> {
    pub rider_id: i64,
    pub driver_id: i64,
    pub vehicle_id: i64,
    pub pickup: &'a str,
    pub fare_cents: i64,
    pub distance_dam: i64,
    pub status: &'a str,
}

pub async fn try_insert_ride(pool: &SqlitePool, ride: &RideFixture<'_>) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO rides (rider_id, driver_id, vehicle_id, pickup_location, dropoff_location, fare_cents, distance_dam, status)
        VALUES (?, ?, ?, ?, 'Central Station', ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(ride.rider_id)
    .bind(ride.driver_id)
    .bind(ride.vehicle_id)
    .bind(ride.pickup)
    .bind(ride.fare_cents)
    .bind(ride.distance_dam)
    .bind(ride.status)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_ride(pool: &SqlitePool, ride: RideFixture<'_>) -> i64 {
    try_insert_ride(pool, &ride).await.expect("insert ride")
}

pub async fn try_insert_payment(
    pool: &SqlitePool,
    ride_id: i64,
    amount_cents: i64,
    status: &str,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO payments (ride_id, amount_cents, payment_mode, status) VALUES (?, ?, 'cash', ?) RETURNING id",
    )
    .bind(ride_id)
    .bind(amount_cents)
    .bind(status)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn try_insert_rating(
    pool: &SqlitePool,
    ride_id: i64,
    rider_rating_x10: i64,
    driver_rating_x10: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO ratings (ride_id, rider_rating_x10, driver_rating_x10, rider_feedback, driver_feedback) VALUES (?, ?, ?, 'ok', 'ok') RETURNING id",
    )
    .bind(ride_id)
    .bind(rider_rating_x10)
    .bind(driver_rating_x10)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Un rider, un driver con vehículo y un viaje en el estado indicado
pub async fn single_ride(pool: &SqlitePool, status: &str) -> (i64, i64, i64, i64) {
    let rider = insert_user(pool, "Solo Rider", "rider").await;
    let driver = insert_user(pool, "Solo Driver", "driver").await;
    let vehicle = insert_vehicle(pool, driver, "SOLO0001").await;
    let ride = insert_ride(
        pool,
        RideFixture {
            rider_id: rider,
            driver_id: driver,
            vehicle_id: vehicle,
            pickup: "Downtown",
            fare_cents: 1000,
            distance_dam: 500,
            status,
        },
    )
    .await;
    (rider, driver, vehicle, ride)
}
