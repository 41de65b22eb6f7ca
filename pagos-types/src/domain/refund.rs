//! Refund domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::payment::PaymentId;

/// Initial status of every refund request.
pub const STATUS_PENDIENTE: &str = "PENDIENTE";

/// Unique identifier for a Refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RefundId(Uuid);

impl RefundId {
    /// Creates a new random RefundId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RefundId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for RefundId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RefundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RefundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A request to return funds for a previously made payment.
///
/// The referenced payment is not required to exist in this service's own
/// store; the reference is carried as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Refund {
    /// Unique identifier
    pub id: RefundId,
    /// Payment the refund is requested against
    pub payment_id: PaymentId,
    /// Amount to return, strictly positive
    pub amount: Decimal,
    /// Current status string, `PENDIENTE` at creation
    pub status: String,
    /// When the refund was requested
    pub requested_at: DateTime<Utc>,
    /// Free-text reason given by the requester
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Refund {
    /// Creates a pending refund against the given payment.
    pub fn pending(payment_id: PaymentId, amount: Decimal) -> Self {
        Self {
            id: RefundId::new(),
            payment_id,
            amount,
            status: STATUS_PENDIENTE.to_string(),
            requested_at: Utc::now(),
            reason: None,
        }
    }

    /// Reconstructs a refund from database fields.
    pub fn from_parts(
        id: RefundId,
        payment_id: PaymentId,
        amount: Decimal,
        status: String,
        requested_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> Self {
        Self {
            id,
            payment_id,
            amount,
            status,
            requested_at,
            reason,
        }
    }
}
