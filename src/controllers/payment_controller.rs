use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::payment_dto::{CreatePaymentRequest, PaymentResponse};
use crate::dto::ApiResponse;
use crate::models::PaymentStatus;
use crate::repositories::{PaymentRepository, RideRepository};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{to_scaled, MONEY_SCALE};

pub struct PaymentController {
    repository: PaymentRepository,
    rides: RideRepository,
}

impl PaymentController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: PaymentRepository::new(pool.clone()),
            rides: RideRepository::new(pool),
        }
    }

    /// Un único pago por viaje, y sólo cuando el viaje ha terminado
    pub async fn create(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<ApiResponse<PaymentResponse>, AppError> {
        request.validate()?;

        let ride = self
            .rides
            .find_by_id(request.ride_id)
            .await?
            .ok_or_else(|| not_found_error("Ride", request.ride_id))?;
        if !ride.status.is_terminal() {
            return Err(AppError::InvalidTransition(format!(
                "Ride {} está en {}; el pago requiere un viaje terminado",
                ride.id, ride.status
            )));
        }

        let payment = self
            .repository
            .create(
                ride.id,
                to_scaled(request.amount, MONEY_SCALE)?,
                request.payment_mode,
                request.status,
            )
            .await?;

        tracing::info!(
            "💳 Pago {} registrado para viaje {} ({})",
            payment.id,
            ride.id,
            payment.status
        );

        Ok(ApiResponse::success_with_message(
            payment.into(),
            "Pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<PaymentResponse, AppError> {
        let payment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Payment", id))?;

        Ok(payment.into())
    }

    pub async fn list(
        &self,
        status: Option<PaymentStatus>,
    ) -> Result<Vec<PaymentResponse>, AppError> {
        let payments = self.repository.list(status).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        id: i64,
        next: PaymentStatus,
    ) -> Result<ApiResponse<PaymentResponse>, AppError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Payment", id))?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::InvalidTransition(format!(
                "Payment {} no puede pasar de {} a {}",
                id, current.status, next
            )));
        }

        let payment = self
            .repository
            .update_status(id, current.status, next)
            .await?
            .ok_or_else(|| {
                AppError::InvalidTransition(format!(
                    "Payment {} cambió de estado durante la operación",
                    id
                ))
            })?;

        Ok(ApiResponse::success_with_message(
            payment.into(),
            format!("Pago actualizado a {}", next),
        ))
    }
}
