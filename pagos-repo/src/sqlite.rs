//! SQLite store adapters.
//!
//! All five stores share one pool. Rows keep ids, timestamps and decimal
//! amounts as TEXT; the row structs re-parse them on the way out. Upserts go
//! through `ON CONFLICT(id) DO UPDATE` so that secondary constraints (the
//! unique user email) still fail loudly instead of replacing foreign rows.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

use pagos_types::domain::{
    Notification, NotificationId, OrderId, Payment, PaymentId, Refund, RefundId, Transaction,
    TransactionId, User, UserId,
};
use pagos_types::error::StoreError;
use pagos_types::ports::{
    NotificationStore, PaymentStore, RefundStore, TransactionStore, UserStore,
};

/// Opens (creating if missing) the database and applies the schema.
pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    // Ensure on-disk SQLite target directory exists (no-op for in-memory).
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        if path != ":memory:" {
            let p = std::path::Path::new(path);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    // An in-memory database exists per connection; the pool must stay at one
    // connection or each handle would see its own empty database.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?
    } else {
        SqlitePool::connect_with(options).await?
    };

    let ddl = include_str!("../migrations/0001_create_tables.sql");
    sqlx::raw_sql(ddl).execute(&pool).await?;
    tracing::debug!("sqlite schema applied");

    Ok(pool)
}

fn db_err(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

fn parse_uuid(s: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(s).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

fn parse_decimal(s: &str) -> Result<Decimal, StoreError> {
    Decimal::from_str(s).map_err(|e| StoreError::Serialization(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed user store.
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
}

impl UserRow {
    fn into_domain(self) -> Result<User, StoreError> {
        Ok(User::from_parts(
            UserId::from_uuid(parse_uuid(&self.id)?),
            self.name,
            self.email,
        ))
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        sqlx::query(
            r#"INSERT INTO users (id, name, email) VALUES (?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email"#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(r#"SELECT id, name, email FROM users WHERE id = ?"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        row.map(UserRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = sqlx::query_as(r#"SELECT id, name, email FROM users"#)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.into_iter().map(UserRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM users WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed payment store.
pub struct SqlitePaymentStore {
    pool: SqlitePool,
}

impl SqlitePaymentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: String,
    amount: String,
    status: String,
    paid_at: String,
    order_id: String,
    user_id: String,
    transaction_id: String,
}

impl PaymentRow {
    fn into_domain(self) -> Result<Payment, StoreError> {
        Ok(Payment::from_parts(
            PaymentId::from_uuid(parse_uuid(&self.id)?),
            parse_decimal(&self.amount)?,
            self.status,
            parse_timestamp(&self.paid_at)?,
            OrderId::from_uuid(parse_uuid(&self.order_id)?),
            UserId::from_uuid(parse_uuid(&self.user_id)?),
            TransactionId::from_uuid(parse_uuid(&self.transaction_id)?),
        ))
    }
}

#[async_trait]
impl PaymentStore for SqlitePaymentStore {
    async fn save(&self, payment: Payment) -> Result<Payment, StoreError> {
        sqlx::query(
            r#"INSERT INTO payments (id, amount, status, paid_at, order_id, user_id, transaction_id)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   amount = excluded.amount,
                   status = excluded.status,
                   paid_at = excluded.paid_at,
                   order_id = excluded.order_id,
                   user_id = excluded.user_id,
                   transaction_id = excluded.transaction_id"#,
        )
        .bind(payment.id.to_string())
        .bind(payment.amount.to_string())
        .bind(&payment.status)
        .bind(payment.paid_at.to_rfc3339())
        .bind(payment.order_id.to_string())
        .bind(payment.user_id.to_string())
        .bind(payment.transaction_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(payment)
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, StoreError> {
        let row: Option<PaymentRow> = sqlx::query_as(
            r#"SELECT id, amount, status, paid_at, order_id, user_id, transaction_id
               FROM payments WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(PaymentRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Payment>, StoreError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"SELECT id, amount, status, paid_at, order_id, user_id, transaction_id
               FROM payments"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(PaymentRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: PaymentId) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed transaction store.
pub struct SqliteTransactionStore {
    pool: SqlitePool,
}

impl SqliteTransactionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TransactionRow {
    id: String,
    payment_id: Option<String>,
    status: String,
    provider: String,
    error_detail: Option<String>,
    amount: Option<String>,
    transacted_at: String,
}

impl TransactionRow {
    fn into_domain(self) -> Result<Transaction, StoreError> {
        let payment_id = self
            .payment_id
            .as_deref()
            .map(parse_uuid)
            .transpose()?
            .map(PaymentId::from_uuid);
        let amount = self.amount.as_deref().map(parse_decimal).transpose()?;

        Ok(Transaction::from_parts(
            TransactionId::from_uuid(parse_uuid(&self.id)?),
            payment_id,
            self.status,
            self.provider,
            self.error_detail,
            amount,
            parse_timestamp(&self.transacted_at)?,
        ))
    }
}

#[async_trait]
impl TransactionStore for SqliteTransactionStore {
    async fn save(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        sqlx::query(
            r#"INSERT INTO transactions (id, payment_id, status, provider, error_detail, amount, transacted_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   payment_id = excluded.payment_id,
                   status = excluded.status,
                   provider = excluded.provider,
                   error_detail = excluded.error_detail,
                   amount = excluded.amount,
                   transacted_at = excluded.transacted_at"#,
        )
        .bind(transaction.id.to_string())
        .bind(transaction.payment_id.map(|id| id.to_string()))
        .bind(&transaction.status)
        .bind(&transaction.provider)
        .bind(&transaction.error_detail)
        .bind(transaction.amount.map(|a| a.to_string()))
        .bind(transaction.transacted_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(transaction)
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        let row: Option<TransactionRow> = sqlx::query_as(
            r#"SELECT id, payment_id, status, provider, error_detail, amount, transacted_at
               FROM transactions WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(TransactionRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let rows: Vec<TransactionRow> = sqlx::query_as(
            r#"SELECT id, payment_id, status, provider, error_detail, amount, transacted_at
               FROM transactions"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: TransactionId) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM transactions WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Refunds
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed refund store.
pub struct SqliteRefundStore {
    pool: SqlitePool,
}

impl SqliteRefundStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RefundRow {
    id: String,
    payment_id: String,
    amount: String,
    status: String,
    requested_at: String,
    reason: Option<String>,
}

impl RefundRow {
    fn into_domain(self) -> Result<Refund, StoreError> {
        Ok(Refund::from_parts(
            RefundId::from_uuid(parse_uuid(&self.id)?),
            PaymentId::from_uuid(parse_uuid(&self.payment_id)?),
            parse_decimal(&self.amount)?,
            self.status,
            parse_timestamp(&self.requested_at)?,
            self.reason,
        ))
    }
}

#[async_trait]
impl RefundStore for SqliteRefundStore {
    async fn save(&self, refund: Refund) -> Result<Refund, StoreError> {
        sqlx::query(
            r#"INSERT INTO refunds (id, payment_id, amount, status, requested_at, reason)
               VALUES (?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   payment_id = excluded.payment_id,
                   amount = excluded.amount,
                   status = excluded.status,
                   requested_at = excluded.requested_at,
                   reason = excluded.reason"#,
        )
        .bind(refund.id.to_string())
        .bind(refund.payment_id.to_string())
        .bind(refund.amount.to_string())
        .bind(&refund.status)
        .bind(refund.requested_at.to_rfc3339())
        .bind(&refund.reason)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(refund)
    }

    async fn find_by_id(&self, id: RefundId) -> Result<Option<Refund>, StoreError> {
        let row: Option<RefundRow> = sqlx::query_as(
            r#"SELECT id, payment_id, amount, status, requested_at, reason
               FROM refunds WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(RefundRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Refund>, StoreError> {
        let rows: Vec<RefundRow> = sqlx::query_as(
            r#"SELECT id, payment_id, amount, status, requested_at, reason FROM refunds"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(RefundRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: RefundId) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM refunds WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed notification store.
pub struct SqliteNotificationStore {
    pool: SqlitePool,
}

impl SqliteNotificationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NotificationRow {
    id: String,
    kind: String,
    message: String,
    sent_at: String,
    recipient_user_id: String,
}

impl NotificationRow {
    fn into_domain(self) -> Result<Notification, StoreError> {
        Ok(Notification::from_parts(
            NotificationId::from_uuid(parse_uuid(&self.id)?),
            self.kind,
            self.message,
            parse_timestamp(&self.sent_at)?,
            UserId::from_uuid(parse_uuid(&self.recipient_user_id)?),
        ))
    }
}

#[async_trait]
impl NotificationStore for SqliteNotificationStore {
    async fn save(&self, notification: Notification) -> Result<Notification, StoreError> {
        sqlx::query(
            r#"INSERT INTO notifications (id, kind, message, sent_at, recipient_user_id)
               VALUES (?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                   kind = excluded.kind,
                   message = excluded.message,
                   sent_at = excluded.sent_at,
                   recipient_user_id = excluded.recipient_user_id"#,
        )
        .bind(notification.id.to_string())
        .bind(&notification.kind)
        .bind(&notification.message)
        .bind(notification.sent_at.to_rfc3339())
        .bind(notification.recipient_user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(notification)
    }

    async fn find_by_id(&self, id: NotificationId) -> Result<Option<Notification>, StoreError> {
        let row: Option<NotificationRow> = sqlx::query_as(
            r#"SELECT id, kind, message, sent_at, recipient_user_id
               FROM notifications WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(NotificationRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Notification>, StoreError> {
        let rows: Vec<NotificationRow> = sqlx::query_as(
            r#"SELECT id, kind, message, sent_at, recipient_user_id FROM notifications"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.into_iter().map(NotificationRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: NotificationId) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM notifications WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
