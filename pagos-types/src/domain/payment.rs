//! Payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::transaction::TransactionId;
use super::user::UserId;

/// Canonical payment status while the gateway call is in flight.
pub const STATUS_PROCESANDO: &str = "PROCESANDO";

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of the order a payment settles.
///
/// Orders live in another system; this service only carries the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random OrderId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an OrderId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A monetary charge tied to an order and a user.
///
/// The status is a plain string: the gateway reports `APROBADO`/`RECHAZADO`,
/// and the status-update operation accepts arbitrary values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Charged amount, exact decimal
    pub amount: Decimal,
    /// Current status string
    pub status: String,
    /// When the payment was recorded
    pub paid_at: DateTime<Utc>,
    /// Order this payment settles
    pub order_id: OrderId,
    /// User who paid
    pub user_id: UserId,
    /// Transaction created by the same processing call
    pub transaction_id: TransactionId,
}

impl Payment {
    /// Creates a payment referencing an already-persisted transaction.
    pub fn new(
        order_id: OrderId,
        user_id: UserId,
        amount: Decimal,
        status: impl Into<String>,
        transaction_id: TransactionId,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            amount,
            status: status.into(),
            paid_at: Utc::now(),
            order_id,
            user_id,
            transaction_id,
        }
    }

    /// Reconstructs a payment from database fields.
    pub fn from_parts(
        id: PaymentId,
        amount: Decimal,
        status: String,
        paid_at: DateTime<Utc>,
        order_id: OrderId,
        user_id: UserId,
        transaction_id: TransactionId,
    ) -> Self {
        Self {
            id,
            amount,
            status,
            paid_at,
            order_id,
            user_id,
            transaction_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_creation() {
        let order = OrderId::new();
        let user = UserId::new();
        let tx = TransactionId::new();
        let payment = Payment::new(order, user, dec!(5000.00), transaction::STATUS_APROBADO, tx);

        assert_eq!(payment.order_id, order);
        assert_eq!(payment.user_id, user);
        assert_eq!(payment.transaction_id, tx);
        assert_eq!(payment.status, "APROBADO");
        assert_eq!(payment.amount, dec!(5000.00));
    }

    #[test]
    fn test_payment_id_roundtrip() {
        let id = PaymentId::new();
        let parsed: PaymentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
