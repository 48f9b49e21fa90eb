//! Transport interceptors
//!
//! Two pass-through hooks invoked by the transport at fixed points in the
//! request lifecycle: [`request_interceptor`] before dispatch and
//! [`response_interceptor`] after receipt. Both only log; neither mutates
//! its input, and neither panics for any input — a diagnostic-logging
//! attempt must never take down the real response handling path.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::core::logging::LOG_TARGET;

/// Debug-level logging capability used by the interceptors.
///
/// Production code uses [`TracingSink`]; tests inject a capturing
/// implementation to assert on emitted lines.
pub trait DebugSink: Send + Sync {
    fn debug(&self, message: &str);
}

/// [`DebugSink`] backed by `tracing`, emitting against the crate's fixed
/// log target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{message}");
    }
}

/// Outbound request as seen by [`request_interceptor`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    /// HTTP method, e.g. `"GET"`
    pub method: String,

    /// Fully resolved request URL
    pub url: String,

    /// JSON payload (an empty object for body-less calls)
    pub body: Value,
}

/// Inbound response as seen by [`response_interceptor`].
///
/// The raw body bytes are kept out of the serialized form; they are reached
/// through [`ResponseRecord::text`], mirroring how the transport exposes
/// the payload separately from the response metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseRecord {
    /// Success indicator (2xx status)
    pub ok: bool,

    /// HTTP status code
    pub status: u16,

    /// HTTP reason phrase
    #[serde(rename = "statusText")]
    pub status_text: String,

    /// URL the response was received from
    pub url: String,

    /// Raw body bytes
    #[serde(skip)]
    pub body: Vec<u8>,
}

impl ResponseRecord {
    /// Body decoded as UTF-8, lossily. Invalid sequences become replacement
    /// characters rather than an error.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

fn serialize_for_log<T: Serialize>(value: &T) -> String {
    // These records always serialize cleanly; the fallback exists so a
    // logging attempt can never raise.
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}

/// Log the outbound request and hand it back unmodified.
pub fn request_interceptor(req: RequestRecord, sink: &dyn DebugSink) -> RequestRecord {
    sink.debug(&format!("REQUEST:\n{}", serialize_for_log(&req)));
    req
}

/// Log the inbound response and hand it back unmodified.
///
/// For successful responses the body is additionally decoded and, when it
/// parses as JSON, logged in structured form; otherwise the decoded raw
/// text is logged and the parse failure is swallowed. Failed responses get
/// no body log — their payload surfaces through the error path instead.
pub fn response_interceptor(res: ResponseRecord, sink: &dyn DebugSink) -> ResponseRecord {
    sink.debug(&format!("RESPONSE:\n{}", serialize_for_log(&res)));
    if res.ok {
        // Decoded before the parse attempt so the fallback branch always
        // logs a fully-initialized value.
        let text = res.text();
        match serde_json::from_str::<Value>(&text) {
            Ok(data) => sink.debug(&format!("DATA:\n{data}")),
            Err(_) => sink.debug(&format!("DATA:\n{text}")),
        }
    }
    res
}
