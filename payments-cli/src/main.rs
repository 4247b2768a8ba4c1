//! Payments CLI
//!
//! Command-line front end for the payment gateway adapter.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use payments_gateway::{AdapterConfig, PaymentAdapter};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment gateway CLI", long_about = None)]
struct Cli {
    /// Charge endpoint of the payment gateway
    #[arg(long, env = "PAYMENT_GATEWAY_URL")]
    gateway_url: Option<String>,

    /// Bearer token sent to the gateway
    #[arg(long, env = "PAYMENT_GATEWAY_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "PAYMENT_GATEWAY_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Charge a card through the gateway
    Charge {
        /// Amount to charge (in RUB)
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        /// Opaque card token issued by the gateway
        #[arg(long)]
        card_token: String,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    fn adapter_config(&self) -> AdapterConfig {
        let mut config = AdapterConfig::default();
        if let Some(url) = &self.gateway_url {
            config = config.with_gateway_url(url);
        }
        if let Some(token) = &self.api_token {
            config = config.with_api_token(token);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,payments_gateway=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the parsed command.
///
/// Returns the JSON document to print and the process exit code.
async fn run(cli: Cli) -> Result<(Value, i32)> {
    let config = cli.adapter_config();

    match cli.command {
        Commands::Charge { amount, card_token } => {
            let adapter = PaymentAdapter::new(config)?;
            let result = adapter.charge(amount, &card_token).await;
            let code = if result.is_success() { 0 } else { 1 };
            Ok((serde_json::to_value(&result)?, code))
        }

        Commands::Config => {
            config.validate()?;
            let summary = json!({
                "gateway_url": config.gateway_url(),
                "api_token": "<redacted>",
                "timeout_secs": config.timeout().as_secs_f64(),
            });
            Ok((summary, 0))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let (output, code) = run(Cli::parse()).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
