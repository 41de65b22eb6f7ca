//! Lifecycle services.
//!
//! One service per aggregate. Each orchestrates store and gateway calls for
//! a single business operation and contains NO infrastructure logic.

mod notification;
mod payment;
mod refund;
mod transaction;
mod user;

pub use notification::NotificationService;
pub use payment::PaymentService;
pub use refund::RefundService;
pub use transaction::TransactionService;
pub use user::UserService;
