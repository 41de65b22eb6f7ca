//! Client example demonstrating the full payment lifecycle against a
//! running server on in-memory stores.
//!
//! Run with: cargo run -p pagos-app --example client_example

use std::net::SocketAddr;
use std::sync::Arc;

use rust_decimal_macros::dec;
use tokio::net::TcpListener;

use pagos_client::PagosClient;
use pagos_hex::inbound::{AppState, HttpServer};
use pagos_hex::{
    NotificationService, PaymentService, RefundService, TransactionService, UserService,
};
use pagos_repo::{Stores, WebpayClient};
use pagos_types::PaymentGateway;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port} (in-memory stores)...");

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

    let router = HttpServer::new(state).router();
    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let client = PagosClient::new(format!("http://127.0.0.1:{port}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full payment lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let user = client.create_user("Valentina Rojas", "valentina@example.com").await?;
    println!("✅ Created user: {} (id={})", user.name, user.id);

    let payment = client
        .process_payment(pagos_types::OrderId::new(), user.id, dec!(5000.00))
        .await?;
    println!(
        "✅ Payment processed: {} {} (tx={})",
        payment.amount, payment.status, payment.transaction_id
    );

    let tx = client.get_transaction(payment.transaction_id).await?;
    println!("   Stored transaction via {} -> {}", tx.provider, tx.status);

    let gateway_view = client.query_transaction_status(payment.transaction_id).await?;
    println!("   Gateway status query -> {}", gateway_view.status);

    // A refund with a bad amount is rejected
    let bad_refund = client.process_refund(payment.id, dec!(-100)).await;
    assert!(bad_refund.is_err());
    println!("✅ Negative refund rejected: {}", bad_refund.unwrap_err());

    // A proper refund goes through and stays PENDIENTE
    let refund = client.process_refund(payment.id, dec!(1000.00)).await?;
    println!("✅ Refund recorded: {} {}", refund.amount, refund.status);

    // Flip the payment status by hand
    client.update_payment_status(payment.id, "RECHAZADO").await?;
    let payment = client.get_payment(payment.id).await?;
    println!("✅ Payment status now: {}", payment.status);

    let payments = client.list_payments().await?;
    println!("\n📋 All payments:");
    for p in payments {
        println!("   - {} {} ({})", p.id, p.amount, p.status);
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
