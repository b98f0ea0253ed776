//! Profile Client Implementation
//!
//! The high-level fetch path: the same logical GET as the raw transport
//! client, routed through the retry executor with a per-call retry ceiling
//! and a field projection so only the requested field travels the wire.

use std::sync::Arc;

use crate::auth::{TokenProvider, ensure_credential};
use crate::error::ClientError;
use crate::retry::{RetryExecutor, RetryPolicy};
use crate::transport::outcome_from_error;
use crate::types::{FetchOutcome, HttpConfig};
use crate::utils::http::{build_http_client, join_url, read_json_checked};

/// Higher-level request executor with a retry policy attached
pub struct ProfileClient {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    executor: RetryExecutor,
}

impl std::fmt::Debug for ProfileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileClient")
            .field("base_url", &self.base_url)
            .field("policy", self.executor.policy())
            .finish()
    }
}

impl ProfileClient {
    /// Creates a client on the vendor-default retry pipeline.
    ///
    /// The default pipeline retries throttling and temporary server failures
    /// (429, 503, 504) and transport failures, up to
    /// [`RetryPolicy::default`]'s ceiling with its fixed delay.
    pub fn with_default_retry(
        token_provider: Arc<dyn TokenProvider>,
        config: HttpConfig,
    ) -> Result<Self, ClientError> {
        Self::with_retry_policy(token_provider, config, RetryPolicy::default())
    }

    /// Creates a client on a custom retry pipeline.
    ///
    /// The pipeline choice is fixed at construction; there is no
    /// post-construction toggle.
    pub fn with_retry_policy(
        token_provider: Arc<dyn TokenProvider>,
        config: HttpConfig,
        policy: RetryPolicy,
    ) -> Result<Self, ClientError> {
        ensure_credential(token_provider.as_ref())?;
        let http_client = build_http_client(&config)?;
        Ok(Self {
            http_client,
            base_url: crate::defaults::http::BASE_URL.to_string(),
            token_provider,
            executor: RetryExecutor::new(policy),
        })
    }

    /// Points the client at a custom base endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The policy this client retries under
    pub fn policy(&self) -> &RetryPolicy {
        self.executor.policy()
    }

    /// Fetches a single field of the caller's own profile.
    ///
    /// Only the named field is requested (`$select` projection). On failure
    /// the retry policy is consulted before each additional attempt, up to
    /// `max_retry_override` extra attempts; the override is an upper bound
    /// layered on the policy's own ceiling, not a guarantee of retries. The
    /// final outcome is always returned as a value, never raised.
    pub async fn fetch_field(&self, field: &str, max_retry_override: u32) -> FetchOutcome {
        let result = self
            .executor
            .run(max_retry_override, || self.attempt(field))
            .await;

        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(error) => {
                tracing::debug!("client fetch of field {field} failed: {error}");
                outcome_from_error(error)
            }
        }
    }

    async fn attempt(&self, field: &str) -> Result<String, ClientError> {
        let token = self.token_provider.token()?;
        let url = join_url(&self.base_url, crate::defaults::resource::SELF_PROFILE);

        let response = self
            .http_client
            .get(&url)
            .query(&[("$select", field)])
            .bearer_auth(token)
            .send()
            .await?;

        let body = read_json_checked(response).await?;
        Ok(body
            .get(field)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}
