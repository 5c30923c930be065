//! DTOs de la API
//!
//! Requests validados con `validator` y responses con importes en decimal.

pub mod api_response;
pub mod payment_dto;
pub mod rating_dto;
pub mod ride_dto;
pub mod user_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
