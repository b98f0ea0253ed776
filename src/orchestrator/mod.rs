//! Dual-Path Orchestration
//!
//! Runs the raw transport client and the retrying profile client
//! concurrently for the same logical request and reconciles their results
//! into a consensus verdict.
//!
//! Join semantics: both fetches start together, neither blocks or cancels
//! the other, and the verdict is produced only after the slower of the two
//! has completed. There is no race-to-first-result and no shared
//! cancellation; each path enforces its own timeout.

use std::sync::Arc;

use async_trait::async_trait;
use futures::join;

use crate::client::ProfileClient;
use crate::defaults::resource;
use crate::transport::DirectClient;
use crate::types::{FetchOutcome, JoinResult, ProfileConsensus};

/// A fetch path that can produce the caller's own profile mail value.
///
/// Both concrete clients implement this, which keeps the join logic
/// independent of how each path executes its request.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches the profile mail value, classifying every failure into an outcome.
    async fn fetch_profile(&self) -> FetchOutcome;
}

#[async_trait]
impl ProfileSource for DirectClient {
    async fn fetch_profile(&self) -> FetchOutcome {
        self.fetch(resource::SELF_PROFILE).await
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    async fn fetch_profile(&self) -> FetchOutcome {
        self.fetch_field(resource::MAIL_FIELD, crate::defaults::retry::MAX_RETRIES)
            .await
    }
}

/// Runs both fetch paths concurrently and reconciles their results
pub struct Orchestrator {
    transport: Arc<dyn ProfileSource>,
    api: Arc<dyn ProfileSource>,
}

impl Orchestrator {
    /// Creates an orchestrator over any two fetch paths.
    pub fn new(transport: Arc<dyn ProfileSource>, api: Arc<dyn ProfileSource>) -> Self {
        Self { transport, api }
    }

    /// Creates an orchestrator over the two concrete clients.
    pub fn from_clients(transport: DirectClient, api: ProfileClient) -> Self {
        Self {
            transport: Arc::new(transport),
            api: Arc::new(api),
        }
    }

    /// Fetches over both paths and produces the tagged consensus verdict.
    pub async fn fetch_consensus(&self) -> ProfileConsensus {
        let (transport, api) = join!(self.transport.fetch_profile(), self.api.fetch_profile());

        match (transport, api) {
            (FetchOutcome::Success(t), FetchOutcome::Success(a)) => {
                if t == a {
                    ProfileConsensus::Consistent(t)
                } else {
                    tracing::warn!("fetch paths disagree: transport={t}, api={a}");
                    ProfileConsensus::Mismatch { transport: t, api: a }
                }
            }
            (transport, api) => {
                tracing::warn!("partial fetch failure: transport={transport}, api={api}");
                ProfileConsensus::PartialFailure { transport, api }
            }
        }
    }

    /// Fetches over both paths and degrades to the legacy pair signal.
    ///
    /// Only a consistent verdict carries the emails; any disagreement or
    /// failure collapses to the ambiguous empty/empty pair.
    pub async fn join_result(&self) -> JoinResult {
        self.fetch_consensus().await.legacy_pair()
    }
}
