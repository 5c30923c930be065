//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y conversión de decimales.

pub mod errors;
pub mod validation;
