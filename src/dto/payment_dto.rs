use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Payment, PaymentMode, PaymentStatus};
use crate::utils::validation::validate_non_negative;

// Request para registrar el pago de un viaje terminado
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub ride_id: i64,

    #[validate(custom = "validate_non_negative")]
    pub amount: Decimal,

    pub payment_mode: PaymentMode,

    // `pending` si no se indica
    #[serde(default)]
    pub status: PaymentStatus,
}

// Request para cerrar un pago pendiente
#[derive(Debug, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct PaymentFilters {
    pub status: Option<PaymentStatus>,
}

// Response de pago
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub ride_id: i64,
    pub amount: Decimal,
    pub payment_mode: PaymentMode,
    pub status: PaymentStatus,
    pub transaction_time: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            amount: payment.amount(),
            id: payment.id,
            ride_id: payment.ride_id,
            payment_mode: payment.payment_mode,
            status: payment.status,
            transaction_time: payment.transaction_time,
        }
    }
}
