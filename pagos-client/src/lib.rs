//! # Pagos Client SDK
//!
//! A typed Rust client for the Pagos API.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use pagos_types::{
    NotificationRequest, OrderId, Payment, PaymentId, ProcessPaymentRequest,
    ProcessRefundRequest, Refund, RefundId, Transaction, TransactionId, UpdateStatusRequest,
    User, UserId, UserRequest,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pagos API client.
pub struct PagosClient {
    base_url: String,
    http: Client,
}

impl PagosClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────

    /// Processes a payment through the gateway.
    pub async fn process_payment(
        &self,
        order_id: OrderId,
        user_id: UserId,
        amount: Decimal,
    ) -> Result<Payment, ClientError> {
        let req = ProcessPaymentRequest {
            order_id,
            user_id,
            amount,
        };
        self.post("/api/v2/payments/process", &req).await
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, ClientError> {
        self.get(&format!("/api/v2/payments/{}", id)).await
    }

    /// Lists all payments.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ClientError> {
        self.get("/api/v2/payments").await
    }

    /// Overwrites a payment's status.
    pub async fn update_payment_status(
        &self,
        id: PaymentId,
        status: impl Into<String>,
    ) -> Result<(), ClientError> {
        let req = UpdateStatusRequest {
            status: status.into(),
        };
        self.put_no_body(&format!("/api/v2/payments/{}/status", id), &req)
            .await
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v2/payments/{}", id)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Refunds
    // ─────────────────────────────────────────────────────────────────────────

    /// Requests a refund against a payment.
    pub async fn process_refund(
        &self,
        payment_id: PaymentId,
        amount: Decimal,
    ) -> Result<Refund, ClientError> {
        let req = ProcessRefundRequest { payment_id, amount };
        self.post("/api/v2/refunds", &req).await
    }

    /// Gets a refund by ID.
    pub async fn get_refund(&self, id: RefundId) -> Result<Refund, ClientError> {
        self.get(&format!("/api/v2/refunds/{}", id)).await
    }

    /// Lists all refunds.
    pub async fn list_refunds(&self) -> Result<Vec<Refund>, ClientError> {
        self.get("/api/v2/refunds").await
    }

    /// Deletes a refund.
    pub async fn delete_refund(&self, id: RefundId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v2/refunds/{}", id)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transactions
    // ─────────────────────────────────────────────────────────────────────────

    /// Gets a stored transaction by ID.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        self.get(&format!("/api/v2/transactions/{}", id)).await
    }

    /// Lists all transactions.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        self.get("/api/v2/transactions").await
    }

    /// Queries the gateway for a transaction's current status.
    pub async fn query_transaction_status(
        &self,
        id: TransactionId,
    ) -> Result<Transaction, ClientError> {
        self.get(&format!("/api/v2/transactions/{}/status", id)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users & notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Creates a new user.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, ClientError> {
        let req = UserRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        self.post("/api/v2/users", &req).await
    }

    /// Gets a user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User, ClientError> {
        self.get(&format!("/api/v2/users/{}", id)).await
    }

    /// Lists all users.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/api/v2/users").await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v2/users/{}", id)).await
    }

    /// Creates a notification.
    pub async fn create_notification(
        &self,
        req: &NotificationRequest,
    ) -> Result<pagos_types::Notification, ClientError> {
        self.post("/api/v2/notifications", req).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // HTTP plumbing
    // ─────────────────────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn put_no_body<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.expect_success(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.expect_success(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(self.api_error(status, resp).await)
        }
    }

    async fn expect_success(&self, resp: reqwest::Response) -> Result<(), ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.api_error(status, resp).await)
        }
    }

    async fn api_error(
        &self,
        status: reqwest::StatusCode,
        resp: reqwest::Response,
    ) -> ClientError {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
