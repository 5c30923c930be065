//! Ride booking: schema relacional, acceso a datos y reportes
//!
//! Riders, drivers, vehículos, viajes, pagos y valoraciones sobre SQLite,
//! con una API HTTP en Axum.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
