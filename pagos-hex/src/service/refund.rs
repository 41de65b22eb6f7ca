//! Refund lifecycle service.

use std::sync::Arc;

use rust_decimal::Decimal;

use pagos_types::error::DomainError;
use pagos_types::{AppError, PaymentGateway, PaymentId, Refund, RefundId, RefundStore};

/// Orchestrates refund requests and refund CRUD.
pub struct RefundService {
    refunds: Arc<dyn RefundStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl RefundService {
    /// Creates the service with explicit store and gateway handles.
    pub fn new(refunds: Arc<dyn RefundStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { refunds, gateway }
    }

    /// Requests a refund through the gateway and records it.
    ///
    /// Rejects non-positive amounts before touching the gateway or the
    /// store. Whether `payment_id` names a payment this service knows about
    /// is deliberately not checked: the reference is carried as-is.
    pub async fn process_refund(
        &self,
        payment_id: PaymentId,
        amount: Decimal,
    ) -> Result<Refund, AppError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidRefundAmount(amount).into());
        }

        tracing::info!(%payment_id, %amount, "requesting refund");

        let refund = self.gateway.request_refund(payment_id, amount).await?;
        self.refunds.save(refund).await.map_err(Into::into)
    }

    /// Overwrites the status of an existing refund; silently ignores
    /// unknown ids, same contract as the payment status update.
    pub async fn update_status(&self, id: RefundId, status: String) -> Result<(), AppError> {
        match self.refunds.find_by_id(id).await? {
            Some(mut refund) => {
                refund.status = status;
                self.refunds.save(refund).await?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Gets a refund by id; `None` when missing.
    pub async fn get_by_id(&self, id: RefundId) -> Result<Option<Refund>, AppError> {
        self.refunds.find_by_id(id).await.map_err(Into::into)
    }

    /// Lists all refunds, unordered.
    pub async fn find_all(&self) -> Result<Vec<Refund>, AppError> {
        self.refunds.find_all().await.map_err(Into::into)
    }

    /// Inserts or replaces a refund as-is.
    pub async fn save(&self, refund: Refund) -> Result<Refund, AppError> {
        self.refunds.save(refund).await.map_err(Into::into)
    }

    /// Deletes a refund; no-op on unknown ids.
    pub async fn delete_by_id(&self, id: RefundId) -> Result<(), AppError> {
        self.refunds.delete_by_id(id).await.map_err(Into::into)
    }
}
