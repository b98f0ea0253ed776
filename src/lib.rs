//! # Twinfetch - Dual-Path HTTP Fetching with a Pluggable Retry Policy
//!
//! Twinfetch fetches the same remote profile resource over two independent
//! paths and checks that they agree:
//!
//! - **Raw transport path**: one authenticated GET, single-shot by design.
//! - **Client path**: the same logical GET routed through a retry executor
//!   with a pluggable decision hook and a per-call retry ceiling.
//! - **Orchestrator**: runs both paths concurrently, waits for both, and
//!   reconciles the results into a consensus verdict.
//!
#![deny(unsafe_code)]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use twinfetch::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(EnvTokenProvider::from_env("TWINFETCH_TOKEN")?);
//!
//!     let transport = DirectClient::new(provider.clone(), HttpConfig::default())?;
//!     let client = ProfileClient::with_retry_policy(
//!         provider,
//!         HttpConfig::default(),
//!         RetryPolicy::never(),
//!     )?;
//!
//!     let orchestrator = Orchestrator::from_clients(transport, client);
//!     match orchestrator.fetch_consensus().await {
//!         ProfileConsensus::Consistent(mail) => println!("both paths agree: {mail}"),
//!         other => println!("no consensus: {other:?}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Retry Philosophy
//!
//! The retry policy is a single pure decision hook over a fixed delay and a
//! bounded attempt count. [`RetryPolicy::default`] emulates the upstream
//! service's stock handler (retry on 429/503/504 and transport failures);
//! [`RetryPolicy::never`] disables retries entirely, which is the pipeline
//! the comparison demo installs. Both are ordinary values of the same type,
//! selected at client construction.

pub mod auth;
pub mod client;
pub mod defaults;
pub mod error;
pub mod orchestrator;
pub mod prelude;
pub mod retry;
pub mod transport;
pub mod types;

pub(crate) mod utils;

// Convenience re-exports at the crate root
pub use auth::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
pub use client::ProfileClient;
pub use error::{ClientError, ErrorCategory};
pub use orchestrator::{Orchestrator, ProfileSource};
pub use retry::{RetryDecision, RetryExecutor, RetryPolicy};
pub use transport::DirectClient;
pub use types::{
    FetchOutcome, HttpConfig, HttpConfigBuilder, JoinResult, ProfileConsensus, ResponseInfo,
    UserProfile,
};
