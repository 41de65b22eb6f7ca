//! Store port traits.
//!
//! One store per entity; adapters (in-memory, SQLite) implement these.
//! Every store follows the same contract:
//! - `save` is insert-or-replace keyed by id (ids are minted by the domain
//!   constructors, never by the store)
//! - `find_by_id` returns `None` on a miss, never an error
//! - `find_all` returns an unordered snapshot
//! - `delete_by_id` is a no-op on a miss

use crate::domain::{
    Notification, NotificationId, Payment, PaymentId, Refund, RefundId, Transaction,
    TransactionId, User, UserId,
};
use crate::error::StoreError;

/// Persistence port for users.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn save(&self, user: User) -> Result<User, StoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;
    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError>;
}

/// Persistence port for payments.
#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync + 'static {
    async fn save(&self, payment: Payment) -> Result<Payment, StoreError>;
    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Payment>, StoreError>;
    async fn delete_by_id(&self, id: PaymentId) -> Result<(), StoreError>;
}

/// Persistence port for gateway transactions.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    async fn save(&self, transaction: Transaction) -> Result<Transaction, StoreError>;
    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Transaction>, StoreError>;
    async fn delete_by_id(&self, id: TransactionId) -> Result<(), StoreError>;
}

/// Persistence port for refunds.
#[async_trait::async_trait]
pub trait RefundStore: Send + Sync + 'static {
    async fn save(&self, refund: Refund) -> Result<Refund, StoreError>;
    async fn find_by_id(&self, id: RefundId) -> Result<Option<Refund>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Refund>, StoreError>;
    async fn delete_by_id(&self, id: RefundId) -> Result<(), StoreError>;
}

/// Persistence port for notifications.
#[async_trait::async_trait]
pub trait NotificationStore: Send + Sync + 'static {
    async fn save(&self, notification: Notification) -> Result<Notification, StoreError>;
    async fn find_by_id(&self, id: NotificationId) -> Result<Option<Notification>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Notification>, StoreError>;
    async fn delete_by_id(&self, id: NotificationId) -> Result<(), StoreError>;
}
