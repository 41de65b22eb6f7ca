//! SQLite adapter tests against an in-memory database.

use chrono::Utc;
use rust_decimal_macros::dec;

use pagos_types::domain::{
    Notification, Payment, PaymentId, Refund, Transaction, TransactionId, User, UserId,
};
use pagos_types::error::StoreError;
use pagos_types::ports::{
    NotificationStore, PaymentStore, RefundStore, TransactionStore, UserStore,
};
use pagos_types::OrderId;

use crate::sqlite::{
    connect, SqliteNotificationStore, SqlitePaymentStore, SqliteRefundStore,
    SqliteTransactionStore, SqliteUserStore,
};

async fn test_pool() -> sqlx::SqlitePool {
    connect("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn test_payment_roundtrip() {
    let store = SqlitePaymentStore::new(test_pool().await);
    let payment = Payment::new(
        OrderId::new(),
        UserId::new(),
        dec!(5000.00),
        "APROBADO",
        TransactionId::new(),
    );

    store.save(payment.clone()).await.unwrap();
    let found = store.find_by_id(payment.id).await.unwrap().unwrap();

    assert_eq!(found.id, payment.id);
    assert_eq!(found.amount, payment.amount);
    assert_eq!(found.status, payment.status);
    assert_eq!(found.order_id, payment.order_id);
    assert_eq!(found.user_id, payment.user_id);
    assert_eq!(found.transaction_id, payment.transaction_id);
    // RFC 3339 keeps full precision both ways.
    assert_eq!(found.paid_at, payment.paid_at);
}

#[tokio::test]
async fn test_transaction_roundtrip_with_nulls() {
    let store = SqliteTransactionStore::new(test_pool().await);
    let tx = Transaction::from_parts(
        TransactionId::new(),
        None,
        "APROBADO".to_string(),
        "WEBPAYPLUS".to_string(),
        None,
        None,
        Utc::now(),
    );

    store.save(tx.clone()).await.unwrap();
    let found = store.find_by_id(tx.id).await.unwrap().unwrap();

    assert!(found.payment_id.is_none());
    assert!(found.error_detail.is_none());
    assert!(found.amount.is_none());
    assert_eq!(found.provider, "WEBPAYPLUS");
}

#[tokio::test]
async fn test_refund_roundtrip() {
    let store = SqliteRefundStore::new(test_pool().await);
    let mut refund = Refund::pending(PaymentId::new(), dec!(250.00));
    refund.reason = Some("producto defectuoso".to_string());

    store.save(refund.clone()).await.unwrap();
    let found = store.find_by_id(refund.id).await.unwrap().unwrap();

    assert_eq!(found.payment_id, refund.payment_id);
    assert_eq!(found.amount, dec!(250.00));
    assert_eq!(found.status, "PENDIENTE");
    assert_eq!(found.reason.as_deref(), Some("producto defectuoso"));
}

#[tokio::test]
async fn test_save_is_upsert() {
    let store = SqlitePaymentStore::new(test_pool().await);
    let mut payment = Payment::new(
        OrderId::new(),
        UserId::new(),
        dec!(100),
        "PROCESANDO",
        TransactionId::new(),
    );
    store.save(payment.clone()).await.unwrap();

    payment.status = "APROBADO".to_string();
    store.save(payment.clone()).await.unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, "APROBADO");
}

#[tokio::test]
async fn test_duplicate_email_fails() {
    let store = SqliteUserStore::new(test_pool().await);
    store
        .save(User::new("Ana", "ana@example.com"))
        .await
        .unwrap();

    let result = store.save(User::new("Otra Ana", "ana@example.com")).await;
    assert!(matches!(result, Err(StoreError::Database(_))));
}

#[tokio::test]
async fn test_find_all_empty_and_delete_noop() {
    let pool = test_pool().await;
    let notifications = SqliteNotificationStore::new(pool.clone());

    assert!(notifications.find_all().await.unwrap().is_empty());
    notifications
        .delete_by_id(pagos_types::NotificationId::new())
        .await
        .unwrap();

    let n = Notification::new("PAGO_APROBADO", "listo", UserId::new());
    notifications.save(n.clone()).await.unwrap();
    notifications.delete_by_id(n.id).await.unwrap();
    assert!(notifications.find_by_id(n.id).await.unwrap().is_none());
}
