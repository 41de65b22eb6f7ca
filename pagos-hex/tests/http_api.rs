//! HTTP-level tests for the pagos API.
//!
//! Drives the real router with in-memory stores and the Webpay stub via
//! tower's `oneshot`, asserting on the status-code contract of the REST
//! surface.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pagos_hex::inbound::{AppState, HttpServer};
use pagos_hex::{
    NotificationService, PaymentService, RefundService, TransactionService, UserService,
};
use pagos_repo::{Stores, WebpayClient};
use pagos_types::PaymentGateway;

fn test_app() -> Router {
    let stores = Stores::in_memory();
    let gateway: Arc<dyn PaymentGateway> = Arc::new(WebpayClient::new());

    let state = AppState {
        users: UserService::new(stores.users.clone()),
        payments: PaymentService::new(
            stores.payments.clone(),
            stores.transactions.clone(),
            gateway.clone(),
        ),
        transactions: TransactionService::new(stores.transactions.clone(), gateway.clone()),
        refunds: RefundService::new(stores.refunds.clone(), gateway),
        notifications: NotificationService::new(stores.notifications.clone()),
    };

    HttpServer::new(state).router()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_process_payment_creates_payment_and_transaction() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/payments/process",
            serde_json::json!({
                "order_id": uuid::Uuid::new_v4(),
                "user_id": uuid::Uuid::new_v4(),
                "amount": "5000.00",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string();
    let payment = body_json(response).await;

    assert_eq!(payment["status"], "APROBADO");
    assert_eq!(location, format!("/api/v2/payments/{}", payment["id"].as_str().unwrap()));

    // The payment is readable back.
    let response = app.clone().oneshot(get_request(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The transaction it references was persisted too.
    let tx_id = payment["transaction_id"].as_str().unwrap();
    let response = app
        .oneshot(get_request(&format!("/api/v2/transactions/{}", tx_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tx = body_json(response).await;
    assert_eq!(tx["provider"], "WEBPAYPLUS");
    assert_eq!(tx["status"], "APROBADO");
}

#[tokio::test]
async fn test_get_unknown_payment_is_404() {
    let app = test_app();
    let response = app
        .oneshot(get_request(&format!(
            "/api/v2/payments/{}",
            uuid::Uuid::new_v4()
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_malformed_payment_id_is_400() {
    let app = test_app();
    let response = app
        .oneshot(get_request("/api/v2/payments/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_status_update_flow() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/payments/process",
            serde_json::json!({
                "order_id": uuid::Uuid::new_v4(),
                "user_id": uuid::Uuid::new_v4(),
                "amount": "100.00",
            }),
        ))
        .await
        .unwrap();
    let payment = body_json(response).await;
    let id = payment["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v2/payments/{}/status", id),
            serde_json::json!({ "status": "RECHAZADO" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_request(&format!("/api/v2/payments/{}", id)))
        .await
        .unwrap();
    let payment = body_json(response).await;
    assert_eq!(payment["status"], "RECHAZADO");
}

#[tokio::test]
async fn test_status_update_on_unknown_payment_is_200() {
    // Silent-miss contract: the caller cannot tell the id was unknown.
    let app = test_app();
    let response = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v2/payments/{}/status", uuid::Uuid::new_v4()),
            serde_json::json!({ "status": "APROBADO" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refund_with_negative_amount_is_400() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/refunds",
            serde_json::json!({
                "payment_id": uuid::Uuid::new_v4(),
                "amount": "-100",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 400);

    // Nothing was recorded.
    let response = app.oneshot(get_request("/api/v2/refunds")).await.unwrap();
    let refunds = body_json(response).await;
    assert_eq!(refunds.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_refund_is_created_without_payment_existence_check() {
    let app = test_app();
    let orphan_payment = uuid::Uuid::new_v4();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/refunds",
            serde_json::json!({
                "payment_id": orphan_payment,
                "amount": "250.00",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let refund = body_json(response).await;
    assert_eq!(refund["status"], "PENDIENTE");
    assert_eq!(refund["payment_id"], orphan_payment.to_string());
}

#[tokio::test]
async fn test_delete_unknown_refund_is_204() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v2/refunds/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_user_crud_over_http() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/users",
            serde_json::json!({ "name": "Ana", "email": "ana@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(header::LOCATION));
    let user = body_json(response).await;
    let id = user["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request("/api/v2/users"))
        .await
        .unwrap();
    let users = body_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v2/users/{}", id),
            serde_json::json!({ "name": "Ana María", "email": "ana@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v2/users/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(get_request(&format!("/api/v2/users/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_transaction_gateway_status_query() {
    let app = test_app();
    let id = uuid::Uuid::new_v4();

    let response = app
        .oneshot(get_request(&format!("/api/v2/transactions/{}/status", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tx = body_json(response).await;
    assert_eq!(tx["id"], id.to_string());
    assert_eq!(tx["status"], "APROBADO");
    assert_eq!(tx["provider"], "WEBPAYPLUS");
}

#[tokio::test]
async fn test_notification_create_and_get() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v2/notifications",
            serde_json::json!({
                "type": "PAGO_APROBADO",
                "message": "Su pago fue aprobado",
                "recipient_user_id": uuid::Uuid::new_v4(),
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let notification = body_json(response).await;
    assert_eq!(notification["type"], "PAGO_APROBADO");

    let id = notification["id"].as_str().unwrap();
    let response = app
        .oneshot(get_request(&format!("/api/v2/notifications/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
