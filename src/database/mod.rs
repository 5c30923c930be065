//! Módulo de base de datos
//!
//! Maneja la conexión con SQLite, el schema y los datos de ejemplo.

pub mod connection;
pub mod seed;

pub use connection::{ping, run_migrations, DatabaseConnection};
