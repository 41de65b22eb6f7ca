//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use pagos_types::{
    AppError, Notification, NotificationId, NotificationRequest, Payment, PaymentId,
    PaymentRequest, ProcessPaymentRequest, ProcessRefundRequest, Refund, RefundId, RefundRequest,
    Transaction, TransactionId, TransactionRequest, UpdateStatusRequest, User, UserId,
    UserRequest,
};

use crate::service::{
    NotificationService, PaymentService, RefundService, TransactionService, UserService,
};

/// Application state shared across handlers.
pub struct AppState {
    pub users: UserService,
    pub payments: PaymentService,
    pub transactions: TransactionService,
    pub refunds: RefundService,
    pub notifications: NotificationService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// 201 with a Location header pointing at the new resource.
fn created<T: serde::Serialize>(location: String, body: T) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Processes a payment through the gateway.
#[tracing::instrument(skip(state), fields(order_id = %req.order_id, amount = %req.amount))]
pub async fn process_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state
        .payments
        .process_payment(req.order_id, req.user_id, req.amount)
        .await?;
    Ok(created(format!("/api/v2/payments/{}", payment.id), payment))
}

/// Creates a payment record as-is (plain CRUD create).
#[tracing::instrument(skip(state, req))]
pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = Payment::from_parts(
        PaymentId::new(),
        req.amount,
        req.status,
        req.paid_at.unwrap_or_else(Utc::now),
        req.order_id,
        req.user_id,
        req.transaction_id,
    );
    let payment = state.payments.save(payment).await?;
    Ok(created(format!("/api/v2/payments/{}", payment.id), payment))
}

/// Lists all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.payments.find_all().await?;
    Ok(Json(payments))
}

/// Gets a payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    let payment = state
        .payments
        .get_by_id(payment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment {}", payment_id)))?;
    Ok(Json(payment))
}

/// Replaces a payment record.
#[tracing::instrument(skip(state, req), fields(payment_id = %id))]
pub async fn update_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    let payment = Payment::from_parts(
        payment_id,
        req.amount,
        req.status,
        req.paid_at.unwrap_or_else(Utc::now),
        req.order_id,
        req.user_id,
        req.transaction_id,
    );
    let payment = state.payments.save(payment).await?;
    Ok(Json(payment))
}

/// Overwrites a payment's status. Unknown ids are silently ignored.
#[tracing::instrument(skip(state), fields(payment_id = %id, status = %req.status))]
pub async fn update_payment_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    state.payments.update_status(payment_id, req.status).await?;
    Ok(StatusCode::OK)
}

/// Deletes a payment. 204 whether it existed or not.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid payment ID".into()))?;

    state.payments.delete_by_id(payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Refunds
// ─────────────────────────────────────────────────────────────────────────────

/// Requests a refund. 400 when the amount is not positive.
#[tracing::instrument(skip(state), fields(payment_id = %req.payment_id, amount = %req.amount))]
pub async fn process_refund(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessRefundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let refund = state
        .refunds
        .process_refund(req.payment_id, req.amount)
        .await?;
    Ok(created(format!("/api/v2/refunds/{}", refund.id), refund))
}

/// Lists all refunds.
#[tracing::instrument(skip(state))]
pub async fn list_refunds(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let refunds = state.refunds.find_all().await?;
    Ok(Json(refunds))
}

/// Gets a refund by ID.
#[tracing::instrument(skip(state), fields(refund_id = %id))]
pub async fn get_refund(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let refund_id: RefundId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid refund ID".into()))?;

    let refund = state
        .refunds
        .get_by_id(refund_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Refund {}", refund_id)))?;
    Ok(Json(refund))
}

/// Replaces a refund record.
#[tracing::instrument(skip(state, req), fields(refund_id = %id))]
pub async fn update_refund(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RefundRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let refund_id: RefundId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid refund ID".into()))?;

    let refund = Refund::from_parts(
        refund_id,
        req.payment_id,
        req.amount,
        req.status,
        req.requested_at.unwrap_or_else(Utc::now),
        req.reason,
    );
    let refund = state.refunds.save(refund).await?;
    Ok(Json(refund))
}

/// Overwrites a refund's status. Unknown ids are silently ignored.
#[tracing::instrument(skip(state), fields(refund_id = %id, status = %req.status))]
pub async fn update_refund_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let refund_id: RefundId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid refund ID".into()))?;

    state.refunds.update_status(refund_id, req.status).await?;
    Ok(StatusCode::OK)
}

/// Deletes a refund. 204 whether it existed or not.
#[tracing::instrument(skip(state), fields(refund_id = %id))]
pub async fn delete_refund(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let refund_id: RefundId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid refund ID".into()))?;

    state.refunds.delete_by_id(refund_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Creates a transaction record as-is.
#[tracing::instrument(skip(state, req))]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = Transaction::from_parts(
        TransactionId::new(),
        req.payment_id,
        req.status,
        req.provider,
        req.error_detail,
        req.amount,
        req.transacted_at.unwrap_or_else(Utc::now),
    );
    let transaction = state.transactions.save(transaction).await?;
    Ok(created(
        format!("/api/v2/transactions/{}", transaction.id),
        transaction,
    ))
}

/// Lists all transactions.
#[tracing::instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.transactions.find_all().await?;
    Ok(Json(transactions))
}

/// Gets a transaction by ID.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid transaction ID".into()))?;

    let transaction = state
        .transactions
        .get_by_id(transaction_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {}", transaction_id)))?;
    Ok(Json(transaction))
}

/// Replaces a transaction record.
#[tracing::instrument(skip(state, req), fields(transaction_id = %id))]
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid transaction ID".into()))?;

    let transaction = Transaction::from_parts(
        transaction_id,
        req.payment_id,
        req.status,
        req.provider,
        req.error_detail,
        req.amount,
        req.transacted_at.unwrap_or_else(Utc::now),
    );
    let transaction = state.transactions.save(transaction).await?;
    Ok(Json(transaction))
}

/// Asks the gateway for a transaction's current status.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn transaction_gateway_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid transaction ID".into()))?;

    let transaction = state.transactions.query_gateway_status(transaction_id).await?;
    Ok(Json(transaction))
}

/// Deletes a transaction. 204 whether it existed or not.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction_id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid transaction ID".into()))?;

    state.transactions.delete_by_id(transaction_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// Creates a user.
#[tracing::instrument(skip(state, req))]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.save(User::new(req.name, req.email)).await?;
    Ok(created(format!("/api/v2/users/{}", user.id), user))
}

/// Lists all users.
#[tracing::instrument(skip(state))]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.find_all().await?;
    Ok(Json(users))
}

/// Gets a user by ID.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let user = state
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", user_id)))?;
    Ok(Json(user))
}

/// Replaces a user record.
#[tracing::instrument(skip(state, req), fields(user_id = %id))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    let user = state
        .users
        .save(User::from_parts(user_id, req.name, req.email))
        .await?;
    Ok(Json(user))
}

/// Deletes a user. 204 whether it existed or not.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id: UserId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;

    state.users.delete_by_id(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

/// Creates a notification.
#[tracing::instrument(skip(state, req))]
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NotificationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = Notification::from_parts(
        NotificationId::new(),
        req.kind,
        req.message,
        req.sent_at.unwrap_or_else(Utc::now),
        req.recipient_user_id,
    );
    let notification = state.notifications.save(notification).await?;
    Ok(created(
        format!("/api/v2/notifications/{}", notification.id),
        notification,
    ))
}

/// Lists all notifications.
#[tracing::instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let notifications = state.notifications.find_all().await?;
    Ok(Json(notifications))
}

/// Gets a notification by ID.
#[tracing::instrument(skip(state), fields(notification_id = %id))]
pub async fn get_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_id: NotificationId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid notification ID".into()))?;

    let notification = state
        .notifications
        .get_by_id(notification_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Notification {}", notification_id)))?;
    Ok(Json(notification))
}

/// Replaces a notification record.
#[tracing::instrument(skip(state, req), fields(notification_id = %id))]
pub async fn update_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<NotificationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_id: NotificationId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid notification ID".into()))?;

    let notification = Notification::from_parts(
        notification_id,
        req.kind,
        req.message,
        req.sent_at.unwrap_or_else(Utc::now),
        req.recipient_user_id,
    );
    let notification = state.notifications.save(notification).await?;
    Ok(Json(notification))
}

/// Deletes a notification. 204 whether it existed or not.
#[tracing::instrument(skip(state), fields(notification_id = %id))]
pub async fn delete_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let notification_id: NotificationId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid notification ID".into()))?;

    state.notifications.delete_by_id(notification_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
