//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use pagos_types::domain::{
    Notification, NotificationId, OrderId, Payment, PaymentId, Refund, RefundId, Transaction,
    TransactionId, User, UserId,
};
use pagos_types::dto::{
    NotificationRequest, PaymentRequest, ProcessPaymentRequest, ProcessRefundRequest,
    RefundRequest, TransactionRequest, UpdateStatusRequest, UserRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Process a payment through the gateway
#[utoipa::path(
    post,
    path = "/api/v2/payments/process",
    tag = "payments",
    request_body = ProcessPaymentRequest,
    responses(
        (status = 201, description = "Payment processed and recorded", body = Payment),
        (status = 400, description = "Malformed request")
    )
)]
async fn process_payment() {}

/// Create a payment record
#[utoipa::path(
    post,
    path = "/api/v2/payments",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = Payment)
    )
)]
async fn create_payment() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/v2/payments",
    tag = "payments",
    responses(
        (status = 200, description = "List of payments", body = Vec<Payment>)
    )
)]
async fn list_payments() {}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/api/v2/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment details", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
async fn get_payment() {}

/// Replace a payment record
#[utoipa::path(
    put,
    path = "/api/v2/payments/{id}",
    tag = "payments",
    request_body = PaymentRequest,
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Payment replaced", body = Payment)
    )
)]
async fn update_payment() {}

/// Overwrite a payment's status
///
/// Unknown ids are silently ignored; the response is 200 either way.
#[utoipa::path(
    put,
    path = "/api/v2/payments/{id}/status",
    tag = "payments",
    request_body = UpdateStatusRequest,
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 200, description = "Status accepted")
    )
)]
async fn update_payment_status() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/v2/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID (UUID)")
    ),
    responses(
        (status = 204, description = "Payment deleted (or never existed)")
    )
)]
async fn delete_payment() {}

/// Request a refund
#[utoipa::path(
    post,
    path = "/api/v2/refunds",
    tag = "refunds",
    request_body = ProcessRefundRequest,
    responses(
        (status = 201, description = "Refund recorded", body = Refund),
        (status = 400, description = "Amount must be greater than zero")
    )
)]
async fn process_refund() {}

/// List all refunds
#[utoipa::path(
    get,
    path = "/api/v2/refunds",
    tag = "refunds",
    responses(
        (status = 200, description = "List of refunds", body = Vec<Refund>)
    )
)]
async fn list_refunds() {}

/// Get refund by ID
#[utoipa::path(
    get,
    path = "/api/v2/refunds/{id}",
    tag = "refunds",
    params(
        ("id" = RefundId, Path, description = "Refund ID (UUID)")
    ),
    responses(
        (status = 200, description = "Refund details", body = Refund),
        (status = 404, description = "Refund not found")
    )
)]
async fn get_refund() {}

/// Replace a refund record
#[utoipa::path(
    put,
    path = "/api/v2/refunds/{id}",
    tag = "refunds",
    request_body = RefundRequest,
    params(
        ("id" = RefundId, Path, description = "Refund ID (UUID)")
    ),
    responses(
        (status = 200, description = "Refund replaced", body = Refund)
    )
)]
async fn update_refund() {}

/// Overwrite a refund's status
#[utoipa::path(
    put,
    path = "/api/v2/refunds/{id}/status",
    tag = "refunds",
    request_body = UpdateStatusRequest,
    params(
        ("id" = RefundId, Path, description = "Refund ID (UUID)")
    ),
    responses(
        (status = 200, description = "Status accepted")
    )
)]
async fn update_refund_status() {}

/// Delete a refund
#[utoipa::path(
    delete,
    path = "/api/v2/refunds/{id}",
    tag = "refunds",
    params(
        ("id" = RefundId, Path, description = "Refund ID (UUID)")
    ),
    responses(
        (status = 204, description = "Refund deleted (or never existed)")
    )
)]
async fn delete_refund() {}

/// Create a transaction record
#[utoipa::path(
    post,
    path = "/api/v2/transactions",
    tag = "transactions",
    request_body = TransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = Transaction)
    )
)]
async fn create_transaction() {}

/// List all transactions
#[utoipa::path(
    get,
    path = "/api/v2/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "List of transactions", body = Vec<Transaction>)
    )
)]
async fn list_transactions() {}

/// Get transaction by ID
#[utoipa::path(
    get,
    path = "/api/v2/transactions/{id}",
    tag = "transactions",
    params(
        ("id" = TransactionId, Path, description = "Transaction ID (UUID)")
    ),
    responses(
        (status = 200, description = "Transaction details", body = Transaction),
        (status = 404, description = "Transaction not found")
    )
)]
async fn get_transaction() {}

/// Replace a transaction record
#[utoipa::path(
    put,
    path = "/api/v2/transactions/{id}",
    tag = "transactions",
    request_body = TransactionRequest,
    params(
        ("id" = TransactionId, Path, description = "Transaction ID (UUID)")
    ),
    responses(
        (status = 200, description = "Transaction replaced", body = Transaction)
    )
)]
async fn update_transaction() {}

/// Query the gateway for a transaction's status
#[utoipa::path(
    get,
    path = "/api/v2/transactions/{id}/status",
    tag = "transactions",
    params(
        ("id" = TransactionId, Path, description = "Transaction ID (UUID)")
    ),
    responses(
        (status = 200, description = "Gateway's view of the transaction", body = Transaction)
    )
)]
async fn transaction_gateway_status() {}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/v2/transactions/{id}",
    tag = "transactions",
    params(
        ("id" = TransactionId, Path, description = "Transaction ID (UUID)")
    ),
    responses(
        (status = 204, description = "Transaction deleted (or never existed)")
    )
)]
async fn delete_transaction() {}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v2/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
async fn create_user() {}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v2/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
async fn list_users() {}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v2/users/{id}",
    tag = "users",
    params(
        ("id" = UserId, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
async fn get_user() {}

/// Replace a user record
#[utoipa::path(
    put,
    path = "/api/v2/users/{id}",
    tag = "users",
    request_body = UserRequest,
    params(
        ("id" = UserId, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 200, description = "User replaced", body = User)
    )
)]
async fn update_user() {}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/v2/users/{id}",
    tag = "users",
    params(
        ("id" = UserId, Path, description = "User ID (UUID)")
    ),
    responses(
        (status = 204, description = "User deleted (or never existed)")
    )
)]
async fn delete_user() {}

/// Create a notification
#[utoipa::path(
    post,
    path = "/api/v2/notifications",
    tag = "notifications",
    request_body = NotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification)
    )
)]
async fn create_notification() {}

/// List all notifications
#[utoipa::path(
    get,
    path = "/api/v2/notifications",
    tag = "notifications",
    responses(
        (status = 200, description = "List of notifications", body = Vec<Notification>)
    )
)]
async fn list_notifications() {}

/// Get notification by ID
#[utoipa::path(
    get,
    path = "/api/v2/notifications/{id}",
    tag = "notifications",
    params(
        ("id" = NotificationId, Path, description = "Notification ID (UUID)")
    ),
    responses(
        (status = 200, description = "Notification details", body = Notification),
        (status = 404, description = "Notification not found")
    )
)]
async fn get_notification() {}

/// Replace a notification record
#[utoipa::path(
    put,
    path = "/api/v2/notifications/{id}",
    tag = "notifications",
    request_body = NotificationRequest,
    params(
        ("id" = NotificationId, Path, description = "Notification ID (UUID)")
    ),
    responses(
        (status = 200, description = "Notification replaced", body = Notification)
    )
)]
async fn update_notification() {}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/v2/notifications/{id}",
    tag = "notifications",
    params(
        ("id" = NotificationId, Path, description = "Notification ID (UUID)")
    ),
    responses(
        (status = 204, description = "Notification deleted (or never existed)")
    )
)]
async fn delete_notification() {}

/// OpenAPI documentation for the Pagos API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pagos Service API",
        version = "1.0.0",
        description = "Payment lifecycle service: users, payments, gateway transactions, refunds and notifications. The payment gateway is a Webpay Plus stub that approves every charge.",
    ),
    paths(
        health,
        process_payment,
        create_payment,
        list_payments,
        get_payment,
        update_payment,
        update_payment_status,
        delete_payment,
        process_refund,
        list_refunds,
        get_refund,
        update_refund,
        update_refund_status,
        delete_refund,
        create_transaction,
        list_transactions,
        get_transaction,
        update_transaction,
        transaction_gateway_status,
        delete_transaction,
        create_user,
        list_users,
        get_user,
        update_user,
        delete_user,
        create_notification,
        list_notifications,
        get_notification,
        update_notification,
        delete_notification,
    ),
    components(
        schemas(
            ProcessPaymentRequest,
            ProcessRefundRequest,
            UpdateStatusRequest,
            PaymentRequest,
            TransactionRequest,
            RefundRequest,
            UserRequest,
            NotificationRequest,
            Payment,
            Transaction,
            Refund,
            User,
            Notification,
            PaymentId,
            TransactionId,
            RefundId,
            UserId,
            NotificationId,
            OrderId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment processing and CRUD"),
        (name = "refunds", description = "Refund requests and CRUD"),
        (name = "transactions", description = "Gateway transaction records"),
        (name = "users", description = "User management"),
        (name = "notifications", description = "User notifications"),
    )
)]
pub struct ApiDoc;
