//! Payment lifecycle service.

use std::sync::Arc;

use rust_decimal::Decimal;

use pagos_types::{
    AppError, OrderId, Payment, PaymentGateway, PaymentId, PaymentStore, TransactionStore, UserId,
};

/// Orchestrates payment processing and payment CRUD.
///
/// Holds only port handles. Concurrency control is left entirely to the
/// backing store (last-write-wins per id).
pub struct PaymentService {
    payments: Arc<dyn PaymentStore>,
    transactions: Arc<dyn TransactionStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    /// Creates the service with explicit store and gateway handles.
    pub fn new(
        payments: Arc<dyn PaymentStore>,
        transactions: Arc<dyn TransactionStore>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            payments,
            transactions,
            gateway,
        }
    }

    /// Charges an order through the gateway and records the resulting
    /// transaction and payment.
    ///
    /// The transaction is persisted before the payment and there is no
    /// rollback: a store failure in between leaves the transaction behind.
    /// The amount is passed to the gateway unvalidated.
    pub async fn process_payment(
        &self,
        order_id: OrderId,
        user_id: UserId,
        amount: Decimal,
    ) -> Result<Payment, AppError> {
        let transaction = self.gateway.process_transaction(order_id, amount).await?;
        let transaction = self.transactions.save(transaction).await?;

        let payment = Payment::new(
            order_id,
            user_id,
            amount,
            transaction.status.clone(),
            transaction.id,
        );
        let payment = self.payments.save(payment).await?;

        tracing::info!(
            payment_id = %payment.id,
            transaction_id = %transaction.id,
            status = %payment.status,
            "payment processed"
        );
        Ok(payment)
    }

    /// Overwrites the status of an existing payment.
    ///
    /// Unknown ids are ignored: no write happens and no error is returned.
    /// Callers cannot tell "updated" from "ignored"; that is the inherited
    /// contract, kept deliberately.
    pub async fn update_status(&self, id: PaymentId, status: String) -> Result<(), AppError> {
        match self.payments.find_by_id(id).await? {
            Some(mut payment) => {
                payment.status = status;
                self.payments.save(payment).await?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Gets a payment by id; `None` when missing.
    pub async fn get_by_id(&self, id: PaymentId) -> Result<Option<Payment>, AppError> {
        self.payments.find_by_id(id).await.map_err(Into::into)
    }

    /// Lists all payments, unordered.
    pub async fn find_all(&self) -> Result<Vec<Payment>, AppError> {
        self.payments.find_all().await.map_err(Into::into)
    }

    /// Inserts or replaces a payment as-is.
    pub async fn save(&self, payment: Payment) -> Result<Payment, AppError> {
        self.payments.save(payment).await.map_err(Into::into)
    }

    /// Deletes a payment; no-op on unknown ids.
    pub async fn delete_by_id(&self, id: PaymentId) -> Result<(), AppError> {
        self.payments.delete_by_id(id).await.map_err(Into::into)
    }
}
