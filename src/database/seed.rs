//! Datos de ejemplo
//!
//! Un conjunto pequeño que cubre todos los reportes: riders con y sin viajes,
//! un driver sin vehículo, viajes en cada estado, pagos pendientes y
//! valoraciones negativas.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{PaymentMode, PaymentStatus, RideStatus, UserType, VehicleType};
use crate::utils::errors::AppResult;

const USERS: &[(&str, &str, &str, UserType)] = &[
    ("Amit Sharma", "amit@example.com", "+91 98100 00001", UserType::Rider),
    ("Priya Nair", "priya@example.com", "+91 98100 00002", UserType::Rider),
    ("Rahul Verma", "rahul@example.com", "+91 98100 00003", UserType::Rider),
    ("Sunil Kumar", "sunil@example.com", "+91 98100 00004", UserType::Driver),
    ("Meera Iyer", "meera@example.com", "+91 98100 00005", UserType::Driver),
    ("Karan Singh", "karan@example.com", "+91 98100 00006", UserType::Driver),
];

// (driver, tipo, matrícula, modelo); los índices apuntan a USERS
const VEHICLES: &[(usize, VehicleType, &str, &str)] = &[
    (3, VehicleType::Sedan, "KA01AB1234", "Honda City"),
    (4, VehicleType::Suv, "KA02CD5678", "Toyota Innova"),
];

// (rider, driver, vehículo, origen, destino, tarifa en céntimos, distancia en dam, estado)
const RIDES: &[(usize, usize, usize, &str, &str, i64, i64, RideStatus)] = &[
    (0, 3, 0, "MG Road", "Airport", 45000, 3520, RideStatus::Completed),
    (1, 3, 0, "MG Road", "Whitefield", 32000, 1875, RideStatus::Completed),
    (0, 4, 1, "Indiranagar", "Koramangala", 15050, 640, RideStatus::Completed),
    (1, 4, 1, "MG Road", "Jayanagar", 18000, 910, RideStatus::Cancelled),
    (0, 3, 0, "Indiranagar", "HSR Layout", 21000, 1100, RideStatus::Ongoing),
    (1, 4, 1, "Hebbal", "MG Road", 26000, 1430, RideStatus::Requested),
];

// (viaje, importe en céntimos, modo, estado); los índices apuntan a RIDES
const PAYMENTS: &[(usize, i64, PaymentMode, PaymentStatus)] = &[
    (0, 45000, PaymentMode::CreditCard, PaymentStatus::Completed),
    (1, 32000, PaymentMode::Wallet, PaymentStatus::Pending),
    (2, 15050, PaymentMode::Cash, PaymentStatus::Completed),
    (3, 0, PaymentMode::Cash, PaymentStatus::Failed),
];

// (viaje, rider_rating x10, driver_rating x10, feedback rider, feedback driver)
const RATINGS: &[(usize, i64, i64, &str, &str)] = &[
    (0, 50, 45, "Smooth ride", "Polite passenger"),
    (1, 30, 42, "Driver took a long route", "Rider was late"),
    (2, 40, 33, "Car was not clean", "Good rider"),
];

/// Inserta el conjunto de ejemplo en una sola transacción.
///
/// No hace nada si ya existen usuarios. Devuelve `true` si ha insertado datos.
pub async fn seed_sample_data(pool: &SqlitePool) -> AppResult<bool> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("ℹ️ La base ya tiene {} usuarios, se omiten los datos de ejemplo", existing);
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let base = Utc::now() - Duration::days(7);

    let mut user_ids = Vec::with_capacity(USERS.len());
    for (name, email, phone, user_type) in USERS {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (name, email, phone, user_type, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(user_type)
        .bind(base)
        .fetch_one(&mut *tx)
        .await?;
        user_ids.push(id);
    }

    let mut vehicle_ids = Vec::with_capacity(VEHICLES.len());
    for (driver, vehicle_type, number, model) in VEHICLES {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO vehicles (driver_id, vehicle_type, vehicle_number, model) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(user_ids[*driver])
        .bind(vehicle_type)
        .bind(number)
        .bind(model)
        .fetch_one(&mut *tx)
        .await?;
        vehicle_ids.push(id);
    }

    let mut ride_ids = Vec::with_capacity(RIDES.len());
    for (offset, (rider, driver, vehicle, pickup, dropoff, fare, distance, status)) in
        RIDES.iter().enumerate()
    {
        let created_at = base + Duration::hours(offset as i64 * 6);
        let pickup_time = (*status != RideStatus::Requested).then(|| created_at + Duration::minutes(10));
        let finished_at = (*status == RideStatus::Completed).then(|| created_at + Duration::minutes(55));

        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO rides (
                rider_id, driver_id, vehicle_id, pickup_location, dropoff_location,
                fare_cents, distance_dam, status, pickup_time, dropoff_time, created_at, completed_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_ids[*rider])
        .bind(user_ids[*driver])
        .bind(vehicle_ids[*vehicle])
        .bind(pickup)
        .bind(dropoff)
        .bind(fare)
        .bind(distance)
        .bind(status)
        .bind(pickup_time)
        .bind(finished_at)
        .bind(created_at)
        .bind(finished_at)
        .fetch_one(&mut *tx)
        .await?;
        ride_ids.push(id);
    }

    for (ride, amount, mode, status) in PAYMENTS {
        sqlx::query(
            "INSERT INTO payments (ride_id, amount_cents, payment_mode, status, transaction_time) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(ride_ids[*ride])
        .bind(amount)
        .bind(mode)
        .bind(status)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    }

    for (ride, rider_rating, driver_rating, rider_feedback, driver_feedback) in RATINGS {
        sqlx::query(
            "INSERT INTO ratings (ride_id, rider_rating_x10, driver_rating_x10, rider_feedback, driver_feedback) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(ride_ids[*ride])
        .bind(rider_rating)
        .bind(driver_rating)
        .bind(rider_feedback)
        .bind(driver_feedback)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        "🌱 Datos de ejemplo insertados: {} usuarios, {} vehículos, {} viajes",
        USERS.len(),
        VEHICLES.len(),
        RIDES.len()
    );
    Ok(true)
}
