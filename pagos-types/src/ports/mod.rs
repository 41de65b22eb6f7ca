//! Port traits that adapters must implement.

pub mod gateway;
pub mod stores;

pub use gateway::PaymentGateway;
pub use stores::{NotificationStore, PaymentStore, RefundStore, TransactionStore, UserStore};
