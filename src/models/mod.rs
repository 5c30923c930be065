//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema SQLite de `migrations/`.

pub mod payment;
pub mod rating;
pub mod report;
pub mod ride;
pub mod user;
pub mod vehicle;

pub use payment::{Payment, PaymentMode, PaymentStatus};
pub use rating::Rating;
pub use ride::{Ride, RideStatus};
pub use user::{User, UserType};
pub use vehicle::{Vehicle, VehicleType};
