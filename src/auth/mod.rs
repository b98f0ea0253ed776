//! Authentication helpers and token providers.
//! This module defines a minimal trait to supply Bearer tokens for outgoing requests.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ClientError;

/// A synchronous Bearer token provider.
///
/// Notes:
/// - The interface is intentionally synchronous: the credential is loaded
///   once at startup and shared read-only across concurrent fetches.
/// - Implementations must be cheap to call; they are consulted on every
///   outgoing request.
pub trait TokenProvider: Send + Sync {
    /// Returns an access token string suitable for the `Authorization: Bearer <token>` header.
    fn token(&self) -> Result<String, ClientError>;
}

/// A simple static token provider useful for tests and basic scenarios where
/// the token is managed externally.
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    /// Create a new static token provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Result<String, ClientError> {
        Ok(self.token.expose_secret().to_string())
    }
}

/// Loads the token from an environment variable once, at construction time.
///
/// A missing or blank variable is a fatal configuration error; nothing is
/// retried and no network call is ever attempted with an empty credential.
#[derive(Debug)]
pub struct EnvTokenProvider {
    token: SecretString,
}

impl EnvTokenProvider {
    /// Reads `var` from the environment and fails fast when it is absent or blank.
    pub fn from_env(var: &str) -> Result<Self, ClientError> {
        let value = std::env::var(var).map_err(|_| ClientError::MissingCredential)?;
        if value.trim().is_empty() {
            return Err(ClientError::MissingCredential);
        }
        Ok(Self {
            token: SecretString::from(value),
        })
    }
}

impl TokenProvider for EnvTokenProvider {
    fn token(&self) -> Result<String, ClientError> {
        Ok(self.token.expose_secret().to_string())
    }
}

/// Validates that `provider` yields a usable credential.
///
/// Client constructors call this before anything else so a blank token fails
/// at construction time rather than on the first request.
pub(crate) fn ensure_credential(provider: &dyn TokenProvider) -> Result<(), ClientError> {
    let token = provider.token()?;
    if token.trim().is_empty() {
        return Err(ClientError::MissingCredential);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_roundtrip() {
        let provider = StaticTokenProvider::new("secret-token");
        assert_eq!(provider.token().unwrap(), "secret-token");
    }

    #[test]
    fn test_blank_credential_is_rejected() {
        let provider = StaticTokenProvider::new("   ");
        assert!(matches!(
            ensure_credential(&provider),
            Err(ClientError::MissingCredential)
        ));
    }

    #[test]
    fn test_env_provider_missing_variable() {
        let err = EnvTokenProvider::from_env("TWINFETCH_TEST_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential));
    }
}
