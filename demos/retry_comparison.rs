//! Retry Policy Comparison Demo
//!
//! Fetches your own profile three ways: through the raw transport client,
//! through the retrying profile client with retries disabled, and through
//! the orchestrator that runs both concurrently and checks they agree.
//!
//! Before running, set your bearer token:
//! ```bash
//! export TWINFETCH_TOKEN="your-token"
//! ```
//!
//! Run with:
//! ```bash
//! cargo run --example retry_comparison
//! ```

use std::io::BufRead;
use std::sync::Arc;

use twinfetch::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // A missing or blank token is fatal; nothing below runs without it.
    let provider = Arc::new(EnvTokenProvider::from_env("TWINFETCH_TOKEN")?);

    let transport = DirectClient::new(provider.clone(), HttpConfig::default())?;
    let client = ProfileClient::with_retry_policy(
        provider,
        HttpConfig::default(),
        RetryPolicy::never(),
    )?;

    let outcome = transport.fetch("me").await;
    println!("Http client: {outcome}");

    let outcome = client.fetch_field("mail", 3).await;
    println!("Profile client: {outcome}");

    let orchestrator = Orchestrator::from_clients(transport, client);
    let joined = orchestrator.join_result().await;
    println!(
        "Joined call: http = {} / api = {}",
        joined.transport_email, joined.api_email
    );

    println!("Press Enter to exit.");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
