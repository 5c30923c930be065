//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión entre decimales de la API y enteros escalados de la base.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Escala de importes y distancias (2 decimales)
pub const MONEY_SCALE: u32 = 2;
/// Escala de las puntuaciones (1 decimal)
pub const RATING_SCALE: u32 = 1;

lazy_static! {
    /// Teléfono: prefijo `+` opcional y de 7 a 15 dígitos, admite espacios y guiones
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").unwrap();
}

fn round_with(value: Decimal, scale: u32, strategy: RoundingStrategy) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, strategy);
    rounded.rescale(scale);
    rounded
}

/// Redondea un resultado de reporte (mitad lejos de cero) y fija la escala
fn round_to_scale(value: Decimal, scale: u32) -> Decimal {
    round_with(value, scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Redondea un valor de entrada a la escala de su columna (mitad al par).
///
/// 10.005 se guarda como 10.00 y 10.015 como 10.02.
fn round_for_storage(value: Decimal, scale: u32) -> Decimal {
    round_with(value, scale, RoundingStrategy::MidpointNearestEven)
}

/// Convierte un decimal a su entero escalado (p. ej. 12.34 -> 1234 con escala 2)
pub fn to_scaled(value: Decimal, scale: u32) -> Result<i64, AppError> {
    let rounded = round_for_storage(value, scale);
    i64::try_from(rounded.mantissa())
        .map_err(|_| AppError::BadRequest(format!("Value {} is out of range", value)))
}

/// Convierte un entero escalado de la base a decimal
pub fn from_scaled(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

/// Media exacta de una suma escalada, redondeada a 2 decimales.
///
/// Devuelve `None` si no hay filas, igual que `AVG` sobre un conjunto vacío.
pub fn average_scaled(sum: i64, count: i64, scale: u32) -> Option<Decimal> {
    if count <= 0 {
        return None;
    }
    let average = from_scaled(sum, scale) / Decimal::from(count);
    Some(round_to_scale(average, MONEY_SCALE))
}

/// Validar que un importe o distancia no sea negativo
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if round_for_storage(*value, MONEY_SCALE) < Decimal::ZERO {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que una puntuación, ya redondeada a un decimal, esté en [1.0, 5.0]
pub fn validate_rating(value: &Decimal) -> Result<(), ValidationError> {
    let rounded = round_for_storage(*value, RATING_SCALE);
    if rounded < Decimal::ONE || rounded > Decimal::from(5) {
        let mut error = ValidationError::new("rating_range");
        error.add_param("value".into(), &value.to_string());
        error.add_param("min".into(), &"1.0");
        error.add_param("max".into(), &"5.0");
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
