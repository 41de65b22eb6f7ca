//! Transaction service.

use std::sync::Arc;

use pagos_types::{
    AppError, PaymentGateway, Transaction, TransactionId, TransactionStore,
};

/// CRUD over recorded transactions plus the gateway status query.
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl TransactionService {
    /// Creates the service with explicit store and gateway handles.
    pub fn new(transactions: Arc<dyn TransactionStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            transactions,
            gateway,
        }
    }

    /// Asks the gateway for the current status of a transaction.
    ///
    /// The result is the processor's synthetic view, not the stored row.
    pub async fn query_gateway_status(
        &self,
        id: TransactionId,
    ) -> Result<Transaction, AppError> {
        self.gateway
            .query_transaction_status(id)
            .await
            .map_err(Into::into)
    }

    /// Gets a transaction by id; `None` when missing.
    pub async fn get_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, AppError> {
        self.transactions.find_by_id(id).await.map_err(Into::into)
    }

    /// Lists all transactions, unordered.
    pub async fn find_all(&self) -> Result<Vec<Transaction>, AppError> {
        self.transactions.find_all().await.map_err(Into::into)
    }

    /// Inserts or replaces a transaction as-is.
    pub async fn save(&self, transaction: Transaction) -> Result<Transaction, AppError> {
        self.transactions.save(transaction).await.map_err(Into::into)
    }

    /// Deletes a transaction; no-op on unknown ids.
    pub async fn delete_by_id(&self, id: TransactionId) -> Result<(), AppError> {
        self.transactions.delete_by_id(id).await.map_err(Into::into)
    }
}
