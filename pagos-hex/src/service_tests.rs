//! Lifecycle service unit tests.
//!
//! Stores are local recording mocks so the tests can assert not only on
//! state but on whether a write happened at all (the silent-miss updates
//! must not touch the store). The gateway is the real Webpay stub.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use uuid::Uuid;

use pagos_repo::WebpayClient;
use pagos_types::{
    AppError, OrderId, Payment, PaymentId, PaymentStore, Refund, RefundId, RefundStore,
    StoreError, Transaction, TransactionId, TransactionStore, User, UserId, UserStore,
};

use crate::service::{PaymentService, RefundService, TransactionService, UserService};

/// In-memory payment store that counts saves.
#[derive(Default)]
struct RecordingPaymentStore {
    rows: Mutex<HashMap<Uuid, Payment>>,
    saves: AtomicUsize,
}

impl RecordingPaymentStore {
    fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentStore for RecordingPaymentStore {
    async fn save(&self, payment: Payment) -> Result<Payment, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert(payment.id.into_uuid(), payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_uuid()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: PaymentId) -> Result<(), StoreError> {
        self.rows.lock().unwrap().remove(&id.into_uuid());
        Ok(())
    }
}

/// In-memory transaction store that counts saves.
#[derive(Default)]
struct RecordingTransactionStore {
    rows: Mutex<HashMap<Uuid, Transaction>>,
    saves: AtomicUsize,
}

#[async_trait]
impl TransactionStore for RecordingTransactionStore {
    async fn save(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert(transaction.id.into_uuid(), transaction.clone());
        Ok(transaction)
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_uuid()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: TransactionId) -> Result<(), StoreError> {
        self.rows.lock().unwrap().remove(&id.into_uuid());
        Ok(())
    }
}

/// In-memory refund store that counts saves.
#[derive(Default)]
struct RecordingRefundStore {
    rows: Mutex<HashMap<Uuid, Refund>>,
    saves: AtomicUsize,
}

impl RecordingRefundStore {
    fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RefundStore for RecordingRefundStore {
    async fn save(&self, refund: Refund) -> Result<Refund, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert(refund.id.into_uuid(), refund.clone());
        Ok(refund)
    }

    async fn find_by_id(&self, id: RefundId) -> Result<Option<Refund>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_uuid()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Refund>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: RefundId) -> Result<(), StoreError> {
        self.rows.lock().unwrap().remove(&id.into_uuid());
        Ok(())
    }
}

/// Minimal in-memory user store for the CRUD passthrough tests.
#[derive(Default)]
struct MockUserStore {
    rows: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert(user.id.into_uuid(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id.into_uuid()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError> {
        self.rows.lock().unwrap().remove(&id.into_uuid());
        Ok(())
    }
}

fn payment_service() -> (
    PaymentService,
    Arc<RecordingPaymentStore>,
    Arc<RecordingTransactionStore>,
) {
    let payments = Arc::new(RecordingPaymentStore::default());
    let transactions = Arc::new(RecordingTransactionStore::default());
    let service = PaymentService::new(
        payments.clone(),
        transactions.clone(),
        Arc::new(WebpayClient::new()),
    );
    (service, payments, transactions)
}

fn refund_service() -> (RefundService, Arc<RecordingRefundStore>) {
    let refunds = Arc::new(RecordingRefundStore::default());
    let service = RefundService::new(refunds.clone(), Arc::new(WebpayClient::new()));
    (service, refunds)
}

#[tokio::test]
async fn test_process_payment_links_persisted_transaction() {
    let (service, payments, transactions) = payment_service();

    let payment = service
        .process_payment(OrderId::new(), UserId::new(), dec!(5000.00))
        .await
        .unwrap();

    // The payment references a transaction persisted by the same call.
    let stored = transactions
        .find_by_id(payment.transaction_id)
        .await
        .unwrap()
        .expect("transaction must be persisted");
    assert_eq!(stored.status, "APROBADO");
    assert_eq!(stored.provider, "WEBPAYPLUS");
    assert_eq!(stored.amount, Some(dec!(5000.00)));

    // The payment copies the transaction status and is itself persisted.
    assert_eq!(payment.status, "APROBADO");
    assert_eq!(payment.amount, dec!(5000.00));
    assert!(payments.find_by_id(payment.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_process_payment_does_not_validate_amount() {
    // Asymmetry with refunds: payment amounts pass through unchecked.
    let (service, _payments, _transactions) = payment_service();

    let payment = service
        .process_payment(OrderId::new(), UserId::new(), dec!(-100))
        .await
        .unwrap();

    assert_eq!(payment.amount, dec!(-100));
    assert_eq!(payment.status, "APROBADO");
}

#[tokio::test]
async fn test_update_status_overwrites_existing_payment() {
    let (service, payments, _transactions) = payment_service();
    let payment = service
        .process_payment(OrderId::new(), UserId::new(), dec!(100))
        .await
        .unwrap();

    service
        .update_status(payment.id, "RECHAZADO".to_string())
        .await
        .unwrap();

    let found = payments.find_by_id(payment.id).await.unwrap().unwrap();
    assert_eq!(found.status, "RECHAZADO");
}

#[tokio::test]
async fn test_update_status_accepts_free_form_strings() {
    let (service, payments, _transactions) = payment_service();
    let payment = service
        .process_payment(OrderId::new(), UserId::new(), dec!(100))
        .await
        .unwrap();

    service
        .update_status(payment.id, "EN_REVISION_MANUAL".to_string())
        .await
        .unwrap();

    let found = payments.find_by_id(payment.id).await.unwrap().unwrap();
    assert_eq!(found.status, "EN_REVISION_MANUAL");
}

#[tokio::test]
async fn test_update_status_unknown_id_is_silent_and_writes_nothing() {
    let (service, payments, _transactions) = payment_service();
    let before = payments.save_count();

    service
        .update_status(PaymentId::new(), "APROBADO".to_string())
        .await
        .unwrap();

    assert_eq!(payments.save_count(), before);
    assert!(payments.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_id_miss_is_none_not_error() {
    let (service, _payments, _transactions) = payment_service();
    assert!(service.get_by_id(PaymentId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_empty_store_is_empty_vec() {
    let (service, _payments, _transactions) = payment_service();
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_completes() {
    let (service, _payments, _transactions) = payment_service();
    service.delete_by_id(PaymentId::new()).await.unwrap();
}

#[tokio::test]
async fn test_process_refund_zero_amount_fails_and_persists_nothing() {
    let (service, refunds) = refund_service();

    let result = service.process_refund(PaymentId::new(), dec!(0)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(refunds.save_count(), 0);
    assert!(refunds.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_process_refund_negative_amount_fails() {
    let (service, refunds) = refund_service();

    let result = service.process_refund(PaymentId::new(), dec!(-100)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(refunds.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_process_refund_persists_pending_refund() {
    let (service, refunds) = refund_service();
    let payment_id = PaymentId::new();

    let refund = service.process_refund(payment_id, dec!(250.00)).await.unwrap();

    assert_eq!(refund.status, "PENDIENTE");
    assert_eq!(refund.payment_id, payment_id);
    assert_eq!(refund.amount, dec!(250.00));
    assert_eq!(refunds.save_count(), 1);
    assert!(refunds.find_by_id(refund.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_process_refund_does_not_require_payment_to_exist() {
    // The payment id points nowhere; the refund is recorded anyway.
    let (service, refunds) = refund_service();
    let orphan = PaymentId::new();

    let refund = service.process_refund(orphan, dec!(10)).await.unwrap();

    assert_eq!(refund.payment_id, orphan);
    assert_eq!(refunds.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_refund_update_status_unknown_id_is_silent() {
    let (service, refunds) = refund_service();
    let before = refunds.save_count();

    service
        .update_status(RefundId::new(), "APROBADO".to_string())
        .await
        .unwrap();

    assert_eq!(refunds.save_count(), before);
}

#[tokio::test]
async fn test_transaction_gateway_status_query() {
    let transactions = Arc::new(RecordingTransactionStore::default());
    let service = TransactionService::new(transactions, Arc::new(WebpayClient::new()));

    let id = TransactionId::new();
    let tx = service.query_gateway_status(id).await.unwrap();

    assert_eq!(tx.id, id);
    assert_eq!(tx.status, "APROBADO");
}

#[tokio::test]
async fn test_user_crud_roundtrip() {
    let service = UserService::new(Arc::new(MockUserStore::default()));

    let user = service.save(User::new("Ana", "ana@example.com")).await.unwrap();
    let found = service.get_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "ana@example.com");

    service.delete_by_id(user.id).await.unwrap();
    assert!(service.get_by_id(user.id).await.unwrap().is_none());
    // Deleting again stays a no-op.
    service.delete_by_id(user.id).await.unwrap();
}
