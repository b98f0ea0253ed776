//! Raw Transport Client
//!
//! The low-level fetch path: one authenticated GET against the profile
//! service with no retry policy attached. It exists as the baseline the
//! retrying client is compared against, so it is single-shot by design.

use std::sync::Arc;

use crate::auth::{TokenProvider, ensure_credential};
use crate::error::ClientError;
use crate::types::{FetchOutcome, HttpConfig, UserProfile};
use crate::utils::http::{build_http_client, join_url, read_json_checked};

/// Low-level single-shot request executor
pub struct DirectClient {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for DirectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DirectClient {
    /// Creates a client against the default base endpoint.
    ///
    /// Fails with [`ClientError::MissingCredential`] when the provider yields
    /// a blank token; no network call is ever attempted in that case.
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        config: HttpConfig,
    ) -> Result<Self, ClientError> {
        ensure_credential(token_provider.as_ref())?;
        let http_client = build_http_client(&config)?;
        Ok(Self {
            http_client,
            base_url: crate::defaults::http::BASE_URL.to_string(),
            token_provider,
        })
    }

    /// Points the client at a custom base endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The base endpoint this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the named resource and extracts its mail field.
    ///
    /// Never panics and never returns a raised error: every failure mode is
    /// classified into a [`FetchOutcome`] variant. Exactly one request is
    /// sent per call.
    pub async fn fetch(&self, path: &str) -> FetchOutcome {
        match self.fetch_inner(path).await {
            Ok(mail) => FetchOutcome::Success(mail),
            Err(error) => {
                tracing::debug!("transport fetch of {path} failed: {error}");
                outcome_from_error(error)
            }
        }
    }

    async fn fetch_inner(&self, path: &str) -> Result<String, ClientError> {
        let token = self.token_provider.token()?;
        let url = join_url(&self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        let body = read_json_checked(response).await?;
        let profile: UserProfile = serde_json::from_value(body)?;
        Ok(profile.mail.unwrap_or_default())
    }
}

/// Folds a fetch-level error into its outcome classification.
pub(crate) fn outcome_from_error(error: ClientError) -> FetchOutcome {
    match error {
        ClientError::ApiError {
            status,
            reason,
            body,
            ..
        } => FetchOutcome::Failure {
            status,
            reason,
            body,
        },
        other => FetchOutcome::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;

    struct BlankTokenProvider;

    impl TokenProvider for BlankTokenProvider {
        fn token(&self) -> Result<String, ClientError> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_direct_client_creation() {
        let provider = Arc::new(StaticTokenProvider::new("test-token"));
        let client = DirectClient::new(provider, HttpConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://graph.microsoft.com/v1.0");
    }

    #[test]
    fn test_blank_credential_fails_construction() {
        let provider = Arc::new(BlankTokenProvider);
        let err = DirectClient::new(provider, HttpConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential));
    }

    #[test]
    fn test_outcome_classification() {
        let failure = outcome_from_error(ClientError::api_error(403, "Forbidden", "denied"));
        assert_eq!(
            failure,
            FetchOutcome::Failure {
                status: 403,
                reason: "Forbidden".to_string(),
                body: "denied".to_string(),
            }
        );

        let transport = outcome_from_error(ClientError::HttpError("connection reset".to_string()));
        assert_eq!(
            transport,
            FetchOutcome::Transport("HTTP error: connection reset".to_string())
        );
    }
}
