//! # Pagos Repo
//!
//! Concrete adapters for the pagos service: in-memory stores (always
//! available), SQLite stores (behind the `sqlite` feature), and the Webpay
//! gateway stub.

use std::sync::Arc;

use pagos_types::{NotificationStore, PaymentStore, RefundStore, TransactionStore, UserStore};

pub mod memory;
pub mod webpay;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_tests;

pub use webpay::WebpayClient;

/// Bundle of store handles the application wires into its services.
///
/// All five handles may point at the same backend, but nothing requires it;
/// each lifecycle service receives only the handles it needs.
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub payments: Arc<dyn PaymentStore>,
    pub transactions: Arc<dyn TransactionStore>,
    pub refunds: Arc<dyn RefundStore>,
    pub notifications: Arc<dyn NotificationStore>,
}

impl Stores {
    /// In-memory stores. State lives for the process lifetime only.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(memory::InMemoryUserStore::new()),
            payments: Arc::new(memory::InMemoryPaymentStore::new()),
            transactions: Arc::new(memory::InMemoryTransactionStore::new()),
            refunds: Arc::new(memory::InMemoryRefundStore::new()),
            notifications: Arc::new(memory::InMemoryNotificationStore::new()),
        }
    }

    /// SQLite stores sharing one connection pool, schema applied up front.
    #[cfg(feature = "sqlite")]
    pub async fn sqlite(database_url: &str) -> anyhow::Result<Self> {
        let pool = sqlite::connect(database_url).await?;
        Ok(Self {
            users: Arc::new(sqlite::SqliteUserStore::new(pool.clone())),
            payments: Arc::new(sqlite::SqlitePaymentStore::new(pool.clone())),
            transactions: Arc::new(sqlite::SqliteTransactionStore::new(pool.clone())),
            refunds: Arc::new(sqlite::SqliteRefundStore::new(pool.clone())),
            notifications: Arc::new(sqlite::SqliteNotificationStore::new(pool)),
        })
    }
}

/// Builds stores from an optional database URL.
///
/// With the `sqlite` feature enabled and a URL provided the stores are
/// SQLite-backed; otherwise they are in-memory.
pub async fn build_stores(database_url: Option<&str>) -> anyhow::Result<Stores> {
    if let Some(url) = database_url {
        #[cfg(feature = "sqlite")]
        {
            return Stores::sqlite(url).await;
        }
        #[cfg(not(feature = "sqlite"))]
        tracing::warn!(
            %url,
            "database url ignored: built without the `sqlite` feature, using in-memory stores"
        );
    }
    Ok(Stores::in_memory())
}
