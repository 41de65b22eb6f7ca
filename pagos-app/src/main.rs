//! # Pagos Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the store adapters (in-memory or SQLite)
//! - Construct the gateway stub and the lifecycle services
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagos_hex::inbound::{AppState, HttpServer};
use pagos_hex::{
    NotificationService, PaymentService, RefundService, TransactionService, UserService,
};
use pagos_repo::{WebpayClient, build_stores};
use pagos_types::PaymentGateway;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pagos_app=debug,pagos_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting pagos server on port {}", config.port);

    // Build store adapters and the gateway stub
    let stores = build_stores(config.database_url.as_deref()).await?;
    let gateway: Arc<dyn PaymentGateway> = Arc::new(WebpayClient::new());

    // Wire the lifecycle services with explicit handles
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

    // Create and run the HTTP server
    let server = HttpServer::new(state);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
