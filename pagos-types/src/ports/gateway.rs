//! Payment gateway port.
//!
//! The gateway is an external payment processor. This service ships with a
//! Webpay stub adapter; the port contract still carries an error channel so
//! a real client's infrastructure failures would propagate uncaught.

use rust_decimal::Decimal;

use crate::domain::{OrderId, PaymentId, Refund, Transaction, TransactionId};
use crate::error::GatewayError;

/// Outbound port for the payment processor.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Charges an order. Returns the processor's transaction record;
    /// the record is NOT persisted by the gateway.
    async fn process_transaction(
        &self,
        order_id: OrderId,
        amount: Decimal,
    ) -> Result<Transaction, GatewayError>;

    /// Requests a refund against a payment. The payment is identified only
    /// by id; the gateway does not know whether it exists.
    async fn request_refund(
        &self,
        payment_id: PaymentId,
        amount: Decimal,
    ) -> Result<Refund, GatewayError>;

    /// Queries the processor for the current status of a transaction.
    async fn query_transaction_status(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, GatewayError>;
}
