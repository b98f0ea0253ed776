//! Error Handling Module
//!
//! This module provides the error type shared by every fetch path, including:
//! - The core error enum (`ClientError`)
//! - A coarse-grained category accessor (`ErrorCategory`)
//! - The retryability classifier the default retry policy leans on
//!
//! Normal request failures never escape a fetch operation as raised errors;
//! they are converted to [`FetchOutcome`](crate::types::FetchOutcome) values
//! at the fetch boundary. Only configuration-time failures (a missing or
//! blank credential, unusable configuration) surface as hard `Err` values,
//! and only from client constructors.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::ResponseInfo;

/// Core error type for twinfetch
#[derive(Debug, Error, Clone)]
pub enum ClientError {
    /// The bearer token is missing or blank
    #[error("the bearer token is missing or blank")]
    MissingCredential,

    /// Transport-level failure (DNS, timeout, connection reset)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The service answered with a non-success status
    #[error("API returned {status} ({reason}): {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
        /// Response body text, if any
        body: String,
        /// Response headers (lowercased keys)
        headers: HashMap<String, String>,
    },

    /// The response body could not be parsed
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Construction-time misuse (bad base URL, unusable header value, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Coarse error category for presentation and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration problems, fatal at startup
    Config,
    /// Authentication/authorization rejections
    Auth,
    /// Other client-side (4xx) rejections
    Client,
    /// Server-side (5xx) failures
    Server,
    /// Network-level failures
    Network,
    /// Body parsing failures
    Parsing,
}

impl ClientError {
    /// Creates an API error without response headers (convenient in tests)
    pub fn api_error(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            reason: reason.into(),
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    /// Returns the coarse category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential | Self::InvalidInput(_) => ErrorCategory::Config,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::JsonError(_) => ErrorCategory::Parsing,
            Self::ApiError { status, .. } => match status {
                401 | 403 => ErrorCategory::Auth,
                400..=499 => ErrorCategory::Client,
                _ => ErrorCategory::Server,
            },
        }
    }

    /// Whether the default retry policy considers this error transient
    ///
    /// Mirrors the wrapped service's stock handler: throttling (429) and
    /// temporary server failures (503, 504) are retryable, as are
    /// transport-level failures that never produced a response.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) => true,
            Self::ApiError { status, .. } => matches!(status, 429 | 503 | 504),
            _ => false,
        }
    }

    /// Response descriptor for the retry decision hook
    ///
    /// `None` for failures that never produced an HTTP response.
    pub fn response_info(&self) -> Option<ResponseInfo> {
        match self {
            Self::ApiError {
                status,
                reason,
                headers,
                ..
            } => Some(ResponseInfo {
                status: *status,
                reason: reason.clone(),
                headers: headers.clone(),
            }),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error.to_string())
    }
}
