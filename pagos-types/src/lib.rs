//! # Pagos Types
//!
//! Domain types and port traits for the pagos payment service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Payment, Transaction, Refund, Notification)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Notification, NotificationId, OrderId, Payment, PaymentId, Refund, RefundId, Transaction,
    TransactionId, User, UserId,
};
pub use dto::*;
pub use error::{AppError, DomainError, GatewayError, StoreError};
pub use ports::{
    NotificationStore, PaymentGateway, PaymentStore, RefundStore, TransactionStore, UserStore,
};
