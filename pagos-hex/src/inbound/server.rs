//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};
use crate::openapi::ApiDoc;

/// HTTP Server for the Pagos API.
pub struct HttpServer {
    state: Arc<AppState>,
}

impl HttpServer {
    /// Creates a new HTTP server around wired services.
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/health", get(handlers::health))
            // Payments
            .route("/api/v2/payments/process", post(handlers::process_payment))
            .route("/api/v2/payments", get(handlers::list_payments))
            .route("/api/v2/payments", post(handlers::create_payment))
            .route("/api/v2/payments/{id}", get(handlers::get_payment))
            .route("/api/v2/payments/{id}", put(handlers::update_payment))
            .route(
                "/api/v2/payments/{id}",
                axum::routing::delete(handlers::delete_payment),
            )
            .route(
                "/api/v2/payments/{id}/status",
                put(handlers::update_payment_status),
            )
            // Refunds
            .route("/api/v2/refunds", post(handlers::process_refund))
            .route("/api/v2/refunds", get(handlers::list_refunds))
            .route("/api/v2/refunds/{id}", get(handlers::get_refund))
            .route("/api/v2/refunds/{id}", put(handlers::update_refund))
            .route(
                "/api/v2/refunds/{id}",
                axum::routing::delete(handlers::delete_refund),
            )
            .route(
                "/api/v2/refunds/{id}/status",
                put(handlers::update_refund_status),
            )
            // Transactions
            .route("/api/v2/transactions", get(handlers::list_transactions))
            .route("/api/v2/transactions", post(handlers::create_transaction))
            .route("/api/v2/transactions/{id}", get(handlers::get_transaction))
            .route(
                "/api/v2/transactions/{id}",
                put(handlers::update_transaction),
            )
            .route(
                "/api/v2/transactions/{id}",
                axum::routing::delete(handlers::delete_transaction),
            )
            .route(
                "/api/v2/transactions/{id}/status",
                get(handlers::transaction_gateway_status),
            )
            // Users
            .route("/api/v2/users", get(handlers::list_users))
            .route("/api/v2/users", post(handlers::create_user))
            .route("/api/v2/users/{id}", get(handlers::get_user))
            .route("/api/v2/users/{id}", put(handlers::update_user))
            .route(
                "/api/v2/users/{id}",
                axum::routing::delete(handlers::delete_user),
            )
            // Notifications
            .route("/api/v2/notifications", get(handlers::list_notifications))
            .route(
                "/api/v2/notifications",
                post(handlers::create_notification),
            )
            .route(
                "/api/v2/notifications/{id}",
                get(handlers::get_notification),
            )
            .route(
                "/api/v2/notifications/{id}",
                put(handlers::update_notification),
            )
            .route(
                "/api/v2/notifications/{id}",
                axum::routing::delete(handlers::delete_notification),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
