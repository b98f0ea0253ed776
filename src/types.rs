//! Core types shared across the fetch paths.
//!
//! This module defines the per-attempt outcome classification, the consumed
//! slice of the remote profile resource, the join verdict types, and
//! `HttpConfig` with its builder.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP response metadata handed to the retry decision hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// HTTP status code of the failed attempt
    pub status: u16,
    /// Canonical reason phrase
    pub reason: String,
    /// Response headers (lowercased keys)
    pub headers: HashMap<String, String>,
}

/// Classified result of one logical fetch
///
/// Fetch operations never raise: every failure mode is folded into one of
/// these variants at the fetch boundary. Only the final outcome after retries
/// is surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request succeeded and the target field was extracted
    Success(String),
    /// The service answered with a non-success status
    Failure {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
        /// Response body text, if any
        body: String,
    },
    /// The request never produced an HTTP response
    Transport(String),
}

impl FetchOutcome {
    /// Returns the payload of a successful fetch
    pub fn success_value(&self) -> Option<&str> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this outcome is a success
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{value}"),
            Self::Failure {
                status,
                reason,
                body,
            } => write!(f, "Invalid request - Error {status} ({reason}) - {body}"),
            Self::Transport(message) => write!(f, "{message}"),
        }
    }
}

/// The slice of the remote profile resource both paths consume
///
/// The service returns a much larger JSON document; unknown fields are
/// ignored. `mail` may be null for accounts without a mailbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Primary email address of the profile
    #[serde(default)]
    pub mail: Option<String>,
}

/// Tagged verdict of the dual-path join
///
/// Unlike the legacy pair signal, this distinguishes agreement, disagreement,
/// and partial failure. Use [`ProfileConsensus::legacy_pair`] when bit-for-bit
/// parity with the empty-pair signal is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileConsensus {
    /// Both paths succeeded with the same value
    Consistent(String),
    /// Both paths succeeded but disagreed
    Mismatch {
        /// Value seen by the raw transport path
        transport: String,
        /// Value seen by the retrying client path
        api: String,
    },
    /// At least one path failed; both raw outcomes are preserved
    PartialFailure {
        /// Outcome of the raw transport path
        transport: FetchOutcome,
        /// Outcome of the retrying client path
        api: FetchOutcome,
    },
}

impl ProfileConsensus {
    /// Degrades to the legacy pair signal
    ///
    /// Only a consistent verdict carries values; mismatch and partial failure
    /// both collapse to the ambiguous empty/empty pair.
    pub fn legacy_pair(&self) -> JoinResult {
        match self {
            Self::Consistent(value) => JoinResult {
                transport_email: value.clone(),
                api_email: value.clone(),
            },
            _ => JoinResult::default(),
        }
    }
}

/// Legacy join signal: both emails when consistent, empty/empty otherwise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinResult {
    /// Email seen by the raw transport path
    pub transport_email: String,
    /// Email seen by the retrying client path
    pub api_email: String,
}

/// HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Overall request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Proxy settings
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

/// Builder for `HttpConfig` to construct configuration in a unified and safe way
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = user_agent.map(|s| s.into());
        self
    }
    pub fn proxy<S: Into<String>>(mut self, proxy: Option<S>) -> Self {
        self.proxy = proxy.map(|s| s.into());
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpConfig {
        HttpConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            headers: self.headers,
            proxy: self.proxy,
            user_agent: self.user_agent,
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(crate::defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(crate::defaults::http::USER_AGENT.to_string()),
        }
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
