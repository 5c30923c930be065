//! Controladores
//!
//! Reglas de negocio por encima de los repositorios: roles, ciclo de vida
//! del viaje y conversión a DTOs.

pub mod payment_controller;
pub mod rating_controller;
pub mod report_controller;
pub mod ride_controller;
pub mod user_controller;
pub mod vehicle_controller;

pub use payment_controller::PaymentController;
pub use rating_controller::RatingController;
pub use report_controller::ReportController;
pub use ride_controller::RideController;
pub use user_controller::UserController;
pub use vehicle_controller::VehicleController;
