//! Modelo de Payment
//!
//! Un pago por viaje, creado cuando el viaje ya está en estado terminal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;

use crate::utils::validation::{from_scaled, MONEY_SCALE};

/// Modo de pago - mapea al CHECK de `payments.payment_mode`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    CreditCard,
    DebitCard,
    Wallet,
}

/// Estado del pago - mapea al CHECK de `payments.status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    /// Sólo un pago pendiente puede cerrarse
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        *self == PaymentStatus::Pending && next != PaymentStatus::Pending
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment principal - mapea exactamente a la tabla payments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub ride_id: i64,
    pub amount_cents: i64,
    pub payment_mode: PaymentMode,
    pub status: PaymentStatus,
    pub transaction_time: DateTime<Utc>,
}

impl Payment {
    pub fn amount(&self) -> Decimal {
        from_scaled(self.amount_cents, MONEY_SCALE)
    }
}
