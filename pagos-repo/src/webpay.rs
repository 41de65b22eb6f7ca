//! Webpay gateway stub.
//!
//! Stands in for the external Webpay Plus processor. The response shapes are
//! deterministic (always approved, always `WEBPAYPLUS`); identifiers and
//! timestamps are not. There is no failure path: this is a test double with
//! the production port contract.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use pagos_types::domain::transaction::{PROVIDER_WEBPAYPLUS, STATUS_APROBADO};
use pagos_types::{
    GatewayError, OrderId, PaymentGateway, PaymentId, Refund, Transaction, TransactionId,
};

/// Stub client for the Webpay Plus API.
#[derive(Debug, Default, Clone)]
pub struct WebpayClient;

impl WebpayClient {
    /// Creates a new stub client.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for WebpayClient {
    async fn process_transaction(
        &self,
        _order_id: OrderId,
        amount: Decimal,
    ) -> Result<Transaction, GatewayError> {
        Ok(Transaction::approved(amount))
    }

    async fn request_refund(
        &self,
        payment_id: PaymentId,
        amount: Decimal,
    ) -> Result<Refund, GatewayError> {
        Ok(Refund::pending(payment_id, amount))
    }

    async fn query_transaction_status(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, GatewayError> {
        // Synthetic record: same id, no amount, settled five minutes ago.
        Ok(Transaction::from_parts(
            transaction_id,
            None,
            STATUS_APROBADO.to_string(),
            PROVIDER_WEBPAYPLUS.to_string(),
            None,
            None,
            Utc::now() - Duration::minutes(5),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_process_transaction_is_always_approved() {
        let gateway = WebpayClient::new();
        let tx = gateway
            .process_transaction(OrderId::new(), dec!(5000.00))
            .await
            .unwrap();

        assert_eq!(tx.status, "APROBADO");
        assert_eq!(tx.provider, "WEBPAYPLUS");
        assert_eq!(tx.amount, Some(dec!(5000.00)));
        assert!(tx.error_detail.is_none());
    }

    #[tokio::test]
    async fn test_request_refund_is_pending() {
        let gateway = WebpayClient::new();
        let payment_id = PaymentId::new();
        let refund = gateway.request_refund(payment_id, dec!(250.00)).await.unwrap();

        assert_eq!(refund.status, "PENDIENTE");
        assert_eq!(refund.payment_id, payment_id);
        assert_eq!(refund.amount, dec!(250.00));
    }

    #[tokio::test]
    async fn test_query_status_echoes_id_and_backdates() {
        let gateway = WebpayClient::new();
        let id = TransactionId::new();
        let tx = gateway.query_transaction_status(id).await.unwrap();

        assert_eq!(tx.id, id);
        assert_eq!(tx.status, "APROBADO");
        assert!(tx.amount.is_none());
        assert!(tx.transacted_at <= Utc::now() - Duration::minutes(4));
    }

    #[tokio::test]
    async fn test_ids_are_fresh_per_call() {
        let gateway = WebpayClient::new();
        let a = gateway
            .process_transaction(OrderId::new(), dec!(1))
            .await
            .unwrap();
        let b = gateway
            .process_transaction(OrderId::new(), dec!(1))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
