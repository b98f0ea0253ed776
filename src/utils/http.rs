//! HTTP plumbing shared by both fetch paths.
//!
//! Builds `reqwest` clients from [`HttpConfig`] and classifies responses into
//! crate errors, so the transport client and the retrying client stay
//! behaviorally aligned.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ClientError;
use crate::types::HttpConfig;

/// Builds a `reqwest::Client` from the given configuration.
pub(crate) fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    if let Some(proxy) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| ClientError::InvalidInput(format!("invalid proxy: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if !config.headers.is_empty() {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ClientError::InvalidInput(format!("invalid header name {key}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidInput(format!("invalid header value for {key}: {e}")))?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| ClientError::HttpError(e.to_string()))
}

/// Reads a response body as JSON, converting non-success statuses into
/// [`ClientError::ApiError`] with the body text and headers attached.
pub(crate) async fn read_json_checked(
    response: reqwest::Response,
) -> Result<serde_json::Value, ClientError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ClientError::from)
    } else {
        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let headers = headers_to_map(response.headers());
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::ApiError {
            status: status.as_u16(),
            reason,
            body,
            headers,
        })
    }
}

/// Lowercased header map snapshot; values that are not valid UTF-8 are skipped.
fn headers_to_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect()
}

/// Joins a base URL and a resource path without doubling slashes.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
