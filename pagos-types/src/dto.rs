//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{OrderId, PaymentId, TransactionId, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Lifecycle operation DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to process a payment through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessPaymentRequest {
    /// Order being settled
    pub order_id: OrderId,
    /// Paying user
    pub user_id: UserId,
    /// Amount to charge; not validated, the gateway decides
    #[schema(example = "5000.00")]
    pub amount: Decimal,
}

/// Request to refund a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessRefundRequest {
    /// Payment to refund; existence is not checked
    pub payment_id: PaymentId,
    /// Amount to return, must be greater than zero
    #[schema(example = "250.00")]
    pub amount: Decimal,
}

/// Request to overwrite a payment or refund status.
///
/// Any string is accepted; `APROBADO`, `RECHAZADO`, `PROCESANDO` and
/// `PENDIENTE` are the canonical values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "RECHAZADO")]
    pub status: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// CRUD write DTOs (create and full update; the id comes from the path)
// ─────────────────────────────────────────────────────────────────────────────

/// User create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRequest {
    /// Display name
    #[schema(example = "Valentina Rojas")]
    pub name: String,
    /// Contact email, unique
    #[schema(example = "valentina@example.com")]
    pub email: String,
}

/// Payment create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentRequest {
    pub amount: Decimal,
    #[schema(example = "APROBADO")]
    pub status: String,
    /// Defaults to now when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub order_id: OrderId,
    pub user_id: UserId,
    pub transaction_id: TransactionId,
}

/// Transaction create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    #[schema(example = "APROBADO")]
    pub status: String,
    #[schema(example = "WEBPAYPLUS")]
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Defaults to now when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transacted_at: Option<DateTime<Utc>>,
}

/// Refund full-update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefundRequest {
    pub payment_id: PaymentId,
    pub amount: Decimal,
    #[schema(example = "PENDIENTE")]
    pub status: String,
    /// Defaults to now when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Notification create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationRequest {
    /// Notification category
    #[serde(rename = "type")]
    #[schema(example = "PAGO_APROBADO")]
    pub kind: String,
    pub message: String,
    /// Defaults to now when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    pub recipient_user_id: UserId,
}
