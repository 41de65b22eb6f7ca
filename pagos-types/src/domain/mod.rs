//! Pure domain types for the pagos service.

pub mod notification;
pub mod payment;
pub mod refund;
pub mod transaction;
pub mod user;

pub use notification::{Notification, NotificationId};
pub use payment::{OrderId, Payment, PaymentId};
pub use refund::{Refund, RefundId};
pub use transaction::{Transaction, TransactionId};
pub use user::{User, UserId};
