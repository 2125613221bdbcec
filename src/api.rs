//! # Backend Request Primitive
//!
//! Single entry point for every HTTP call this layer makes. [`ApiClient`]
//! builds the request (base URL join, query string for GET, JSON body for
//! POST/PUT), awaits the response, and classifies the outcome:
//!
//! - 2xx with a JSON body: the decoded payload is returned as-is.
//! - Non-2xx: the payload's `error` field (or a fixed fallback) becomes the
//!   error message.
//! - Transport or JSON decode failure: surfaced as-is.
//!
//! Every failure, of any kind, is logged with the endpoint label and produces
//! exactly one user notification through the injected [`Notifier`], then
//! propagates to the caller. Successes never notify. Callers that want to
//! degrade softly catch the returned error themselves; the primitive never
//! swallows one.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::ApiConfig;
use crate::notify::Notifier;

pub use reqwest::Method;

/// Message used when a non-2xx payload carries no `error` field.
const STATUS_FALLBACK: &str = "Something went wrong";

/// Notification used when a failure has no backend-supplied message
/// (connection errors, malformed response bodies).
const NOTIFY_FALLBACK: &str = "Đã xảy ra lỗi, vui lòng thử lại!";

/// Errors produced by [`ApiClient::request`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: connect error, timeout, or body read error.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-2xx status. `message` is the
    /// payload's `error` field when present.
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The endpoint did not form a valid URL against the configured base.
    #[error("invalid endpoint: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Text shown to the user when this error is notified: the backend's
    /// structured message when there is one, a fixed fallback otherwise.
    pub(crate) fn user_message(&self) -> &str {
        match self {
            ApiError::Status { message, .. } => message,
            _ => NOTIFY_FALLBACK,
        }
    }
}

/// HTTP client for the mini-app backend.
///
/// Cheap to clone is not a goal here; construct one per logical session and
/// share it by reference. The notifier handle is shared so the CLI and tests
/// can observe notifications issued from inside the client.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Build a client against `config.base_url` with the configured timeout.
    pub fn new(config: &ApiConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        // A trailing slash is required for Url::join to treat the base as a
        // directory; without it the last path segment would be replaced.
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            notifier,
        })
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Issue one backend request and decode the JSON payload.
    ///
    /// `query` pairs are attached for GET requests only; `body` is sent for
    /// POST and PUT only, even when supplied for other methods. On failure
    /// the endpoint and error are logged, one notification is issued, and
    /// the error is returned to the caller.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        match self.execute(method, endpoint, body, query).await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                tracing::error!(endpoint, error = %err, "API request failed");
                self.notifier.notify(err.user_message());
                Err(err)
            }
        }
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let mut url = self.base_url.join(endpoint)?;
        if method == Method::GET && !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            if matches!(method, Method::POST | Method::PUT) {
                request = request.json(&body);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.bytes().await?;

        // The body is decoded before the status check: error payloads are
        // structured JSON too, and their `error` field is the user message.
        let payload: Value = serde_json::from_slice(&raw)?;

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(STATUS_FALLBACK)
                .to_string();
            return Err(ApiError::Status { status, message });
        }

        Ok(payload)
    }
}
