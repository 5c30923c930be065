//! Repositorios
//!
//! Acceso a datos: una estructura por tabla más las consultas de reporting.

pub mod payment_repository;
pub mod rating_repository;
pub mod report_repository;
pub mod ride_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use payment_repository::PaymentRepository;
pub use rating_repository::RatingRepository;
pub use report_repository::ReportRepository;
pub use ride_repository::{NewRide, RideRepository};
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
