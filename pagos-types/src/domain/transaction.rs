//! Transaction domain model.
//!
//! A transaction is the gateway-side record of attempting to charge a
//! payment. It is immutable once created, except for its status.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::payment::PaymentId;

/// Status the gateway reports for a settled charge.
pub const STATUS_APROBADO: &str = "APROBADO";
/// Status the gateway reports for a declined charge.
pub const STATUS_RECHAZADO: &str = "RECHAZADO";
/// Provider tag the Webpay gateway stamps on every transaction.
pub const PROVIDER_WEBPAYPLUS: &str = "WEBPAYPLUS";

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
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

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recorded gateway transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Back-reference to the payment; the gateway does not populate it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    /// Status string reported by the gateway
    pub status: String,
    /// Processor that handled the charge, e.g. `WEBPAYPLUS`
    pub provider: String,
    /// Processor error description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    /// Charged amount; absent on synthetic status-query results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// When the charge was attempted
    pub transacted_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates an approved Webpay transaction for the given amount.
    pub fn approved(amount: Decimal) -> Self {
        Self {
            id: TransactionId::new(),
            payment_id: None,
            status: STATUS_APROBADO.to_string(),
            provider: PROVIDER_WEBPAYPLUS.to_string(),
            error_detail: None,
            amount: Some(amount),
            transacted_at: Utc::now(),
        }
    }

    /// Reconstructs a transaction from database fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TransactionId,
        payment_id: Option<PaymentId>,
        status: String,
        provider: String,
        error_detail: Option<String>,
        amount: Option<Decimal>,
        transacted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            payment_id,
            status,
            provider,
            error_detail,
            amount,
            transacted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approved_transaction_shape() {
        let tx = Transaction::approved(dec!(1500.50));

        assert_eq!(tx.status, STATUS_APROBADO);
        assert_eq!(tx.provider, PROVIDER_WEBPAYPLUS);
        assert_eq!(tx.amount, Some(dec!(1500.50)));
        assert!(tx.error_detail.is_none());
        assert!(tx.payment_id.is_none());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(Transaction::approved(dec!(1)).id, Transaction::approved(dec!(1)).id);
    }
}
