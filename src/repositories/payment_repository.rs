use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Payment, PaymentMode, PaymentStatus};
use crate::utils::errors::AppError;

pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// El UNIQUE de `payments.ride_id` rechaza un segundo pago del mismo viaje
    pub async fn create(
        &self,
        ride_id: i64,
        amount_cents: i64,
        payment_mode: PaymentMode,
        status: PaymentStatus,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (ride_id, amount_cents, payment_mode, status, transaction_time)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(ride_id)
        .bind(amount_cents)
        .bind(payment_mode)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(payment)
    }

    pub async fn list(&self, status: Option<PaymentStatus>) -> Result<Vec<Payment>, AppError> {
        let payments = match status {
            Some(status) => {
                sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE status = ? ORDER BY id")
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(payments)
    }

    /// Cambia el estado sólo si el pago sigue en `from`
    pub async fn update_status(
        &self,
        id: i64,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET status = ?, transaction_time = ?
            WHERE id = ? AND status = ?
            RETURNING *
            "#,
        )
        .bind(to)
        .bind(Utc::now())
        .bind(id)
        .bind(from)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }
}
