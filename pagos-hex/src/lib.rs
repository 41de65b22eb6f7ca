//! # Pagos Hex
//!
//! Application service layer and HTTP adapter for the pagos service.
//!
//! ## Architecture
//!
//! - `service/` - Lifecycle services (orchestrate domain operations)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served through Swagger UI
//!
//! Services are built from explicit `Arc<dyn Port>` handles; adapters are
//! injected at construction, never looked up from ambient state.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{
    NotificationService, PaymentService, RefundService, TransactionService, UserService,
};
