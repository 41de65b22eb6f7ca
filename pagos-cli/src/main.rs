//! Pagos CLI
//!
//! Command-line interface for the Pagos API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use pagos_client::PagosClient;
use pagos_types::{OrderId, PaymentId, RefundId, TransactionId, UserId};

#[derive(Parser)]
#[command(name = "pagos")]
#[command(author, version, about = "Pagos API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Pagos API
    #[arg(long, env = "PAGOS_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Refund operations
    Refund {
        #[command(subcommand)]
        action: RefundCommands,
    },
    /// Transaction operations
    Transaction {
        #[command(subcommand)]
        action: TransactionCommands,
    },
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Process a payment through the gateway
    Process {
        /// Order ID (UUID)
        #[arg(long)]
        order: String,
        /// Paying user ID (UUID)
        #[arg(long)]
        user: String,
        /// Amount, e.g. 5000.00
        #[arg(long)]
        amount: Decimal,
    },
    /// Get payment details
    Get {
        /// Payment ID (UUID)
        id: String,
    },
    /// List all payments
    List,
    /// Overwrite a payment's status
    UpdateStatus {
        /// Payment ID (UUID)
        id: String,
        /// New status, e.g. RECHAZADO
        status: String,
    },
    /// Delete a payment
    Delete {
        /// Payment ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
enum RefundCommands {
    /// Request a refund against a payment
    Create {
        /// Payment ID (UUID)
        #[arg(long)]
        payment: String,
        /// Amount to return, must be positive
        #[arg(long)]
        amount: Decimal,
    },
    /// Get refund details
    Get {
        /// Refund ID (UUID)
        id: String,
    },
    /// List all refunds
    List,
    /// Delete a refund
    Delete {
        /// Refund ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// Get a stored transaction
    Get {
        /// Transaction ID (UUID)
        id: String,
    },
    /// List all transactions
    List,
    /// Query the gateway for a transaction's current status
    Status {
        /// Transaction ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Display name
        name: String,
        /// Contact email
        email: String,
    },
    /// Get user details
    Get {
        /// User ID (UUID)
        id: String,
    },
    /// List all users
    List,
    /// Delete a user
    Delete {
        /// User ID (UUID)
        id: String,
    },
}

fn parse_payment_id(s: &str) -> Result<PaymentId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid payment ID: {}", s))
}

fn parse_refund_id(s: &str) -> Result<RefundId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid refund ID: {}", s))
}

fn parse_transaction_id(s: &str) -> Result<TransactionId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid transaction ID: {}", s))
}

fn parse_user_id(s: &str) -> Result<UserId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid user ID: {}", s))
}

fn parse_order_id(s: &str) -> Result<OrderId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid order ID: {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PagosClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Payment { action } => match action {
            PaymentCommands::Process {
                order,
                user,
                amount,
            } => {
                let payment = client
                    .process_payment(parse_order_id(&order)?, parse_user_id(&user)?, amount)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Get { id } => {
                let payment = client.get_payment(parse_payment_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::List => {
                let payments = client.list_payments().await?;
                println!("{}", serde_json::to_string_pretty(&payments)?);
            }
            PaymentCommands::UpdateStatus { id, status } => {
                client
                    .update_payment_status(parse_payment_id(&id)?, status)
                    .await?;
                println!("✓ Status updated");
            }
            PaymentCommands::Delete { id } => {
                client.delete_payment(parse_payment_id(&id)?).await?;
                println!("✓ Payment deleted");
            }
        },

        Commands::Refund { action } => match action {
            RefundCommands::Create { payment, amount } => {
                let refund = client
                    .process_refund(parse_payment_id(&payment)?, amount)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&refund)?);
            }
            RefundCommands::Get { id } => {
                let refund = client.get_refund(parse_refund_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&refund)?);
            }
            RefundCommands::List => {
                let refunds = client.list_refunds().await?;
                println!("{}", serde_json::to_string_pretty(&refunds)?);
            }
            RefundCommands::Delete { id } => {
                client.delete_refund(parse_refund_id(&id)?).await?;
                println!("✓ Refund deleted");
            }
        },

        Commands::Transaction { action } => match action {
            TransactionCommands::Get { id } => {
                let tx = client.get_transaction(parse_transaction_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
            TransactionCommands::List => {
                let txs = client.list_transactions().await?;
                println!("{}", serde_json::to_string_pretty(&txs)?);
            }
            TransactionCommands::Status { id } => {
                let tx = client
                    .query_transaction_status(parse_transaction_id(&id)?)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&tx)?);
            }
        },

        Commands::User { action } => match action {
            UserCommands::Create { name, email } => {
                let user = client.create_user(&name, &email).await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            UserCommands::Get { id } => {
                let user = client.get_user(parse_user_id(&id)?).await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            UserCommands::List => {
                let users = client.list_users().await?;
                println!("{}", serde_json::to_string_pretty(&users)?);
            }
            UserCommands::Delete { id } => {
                client.delete_user(parse_user_id(&id)?).await?;
                println!("✓ User deleted");
            }
        },
    }

    Ok(())
}
