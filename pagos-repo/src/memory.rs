//! In-memory store adapters.
//!
//! Each store is a `DashMap` keyed by the entity's UUID. Concurrent writers
//! get last-write-wins per key; the stores add no other coordination, which
//! is exactly the contract the lifecycle services rely on.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use pagos_types::domain::{
    Notification, NotificationId, Payment, PaymentId, Refund, RefundId, Transaction,
    TransactionId, User, UserId,
};
use pagos_types::error::StoreError;
use pagos_types::ports::{
    NotificationStore, PaymentStore, RefundStore, TransactionStore, UserStore,
};

/// Thread-safe in-memory user store.
///
/// Does NOT enforce email uniqueness; only the SQL adapter carries that
/// constraint.
#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    rows: Arc<DashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        self.rows.insert(user.id.into_uuid(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.rows.get(&id.into_uuid()).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError> {
        self.rows.remove(&id.into_uuid());
        Ok(())
    }
}

/// Thread-safe in-memory payment store.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    rows: Arc<DashMap<Uuid, Payment>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, payment: Payment) -> Result<Payment, StoreError> {
        self.rows.insert(payment.id.into_uuid(), payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError> {
        Ok(self.rows.get(&id.into_uuid()).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: PaymentId) -> Result<(), StoreError> {
        self.rows.remove(&id.into_uuid());
        Ok(())
    }
}

/// Thread-safe in-memory transaction store.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    rows: Arc<DashMap<Uuid, Transaction>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn save(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        self.rows
            .insert(transaction.id.into_uuid(), transaction.clone());
        Ok(transaction)
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.rows.get(&id.into_uuid()).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: TransactionId) -> Result<(), StoreError> {
        self.rows.remove(&id.into_uuid());
        Ok(())
    }
}

/// Thread-safe in-memory refund store.
#[derive(Default, Clone)]
pub struct InMemoryRefundStore {
    rows: Arc<DashMap<Uuid, Refund>>,
}

impl InMemoryRefundStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RefundStore for InMemoryRefundStore {
    async fn save(&self, refund: Refund) -> Result<Refund, StoreError> {
        self.rows.insert(refund.id.into_uuid(), refund.clone());
        Ok(refund)
    }

    async fn find_by_id(&self, id: RefundId) -> Result<Option<Refund>, StoreError> {
        Ok(self.rows.get(&id.into_uuid()).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Refund>, StoreError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: RefundId) -> Result<(), StoreError> {
        self.rows.remove(&id.into_uuid());
        Ok(())
    }
}

/// Thread-safe in-memory notification store.
#[derive(Default, Clone)]
pub struct InMemoryNotificationStore {
    rows: Arc<DashMap<Uuid, Notification>>,
}

impl InMemoryNotificationStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn save(&self, notification: Notification) -> Result<Notification, StoreError> {
        self.rows
            .insert(notification.id.into_uuid(), notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: NotificationId) -> Result<Option<Notification>, StoreError> {
        Ok(self.rows.get(&id.into_uuid()).map(|r| r.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Notification>, StoreError> {
        Ok(self.rows.iter().map(|r| r.value().clone()).collect())
    }

    async fn delete_by_id(&self, id: NotificationId) -> Result<(), StoreError> {
        self.rows.remove(&id.into_uuid());
        Ok(())
    }
}
