//! Error types and error reduction
//!
//! This module defines the crate-wide error enum and `reduce_error`, which
//! collapses an HTTP error carrying full response metadata into a short
//! human-readable string for logs and user-facing messages.

use serde_json::Value;
use thiserror::Error;

/// HTTP response metadata captured from a failed Campaign Standard call.
///
/// All three fields must be truthy (nonzero status, non-empty status text,
/// non-null body) for [`reduce_error`] to produce a summary string.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,

    /// HTTP reason phrase (e.g. "Unauthorized")
    pub status_text: String,

    /// Response body as parsed JSON, or a JSON string of the raw text when
    /// the server returned something unparseable
    pub body: Value,
}

/// Errors that can occur during Campaign Standard API interactions
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("API error (status {}): {}", .response.status, .response.status_text)]
    Response { response: ErrorResponse },
}

impl From<reqwest::Error> for CampaignError {
    fn from(error: reqwest::Error) -> Self {
        CampaignError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for CampaignError {
    fn from(error: serde_json::Error) -> Self {
        CampaignError::Json(error.to_string())
    }
}

/// Outcome of [`reduce_error`]: either a compact summary string or the
/// original error value untouched.
///
/// The summary form discards type information; callers that need the
/// structured error must keep the [`CampaignError`] they started with.
#[derive(Debug)]
pub enum ReducedError {
    /// `"<status> - <status text> (<JSON body>)"`
    Summary(String),

    /// Passthrough for errors without complete response metadata
    Original(CampaignError),
}

impl std::fmt::Display for ReducedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReducedError::Summary(summary) => f.write_str(summary),
            ReducedError::Original(error) => write!(f, "{error}"),
        }
    }
}

/// JSON truthiness, matching what the downstream error surface expects:
/// `null`, `false`, `0`, and `""` are falsy; everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Reduce an error to a short human-readable string when full HTTP response
/// metadata is present.
///
/// Returns [`ReducedError::Summary`] only when status, status text, and body
/// are all truthy; any other error comes back unchanged as
/// [`ReducedError::Original`]. This function never fails.
pub fn reduce_error(error: CampaignError) -> ReducedError {
    if let CampaignError::Response { response } = &error {
        if response.status != 0 && !response.status_text.is_empty() && is_truthy(&response.body) {
            // Value's Display is compact JSON, matching serde_json::to_string.
            return ReducedError::Summary(format!(
                "{} - {} ({})",
                response.status, response.status_text, response.body
            ));
        }
    }
    ReducedError::Original(error)
}
