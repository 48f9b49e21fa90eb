//! Campaign Standard HTTP client
//!
//! This module provides the async client that every endpoint method
//! dispatches through. For each call it assembles the request envelope,
//! runs the transport interceptors around the network operation, and maps
//! failures into [`CampaignError`] values carrying full response metadata
//! where available.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::CampaignConfig;
use crate::core::error::{CampaignError, ErrorResponse};
use crate::core::interceptors::{
    DebugSink, RequestRecord, ResponseRecord, TracingSink, request_interceptor,
    response_interceptor,
};
use crate::core::logging::LOG_TARGET;
use crate::core::options::{OptionsParams, RequestOptions, create_request_options};

/// Header carrying the Adobe I/O API key.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Async client for the Campaign Standard REST API.
///
/// Cheap to clone and safe to share across tasks; the underlying reqwest
/// client is reference-counted and every call operates on its own request
/// state. The client itself carries no retry, caching, or pagination logic.
#[derive(Clone)]
pub struct CampaignClient {
    client: Client,
    config: CampaignConfig,
    base_url: String,
    sink: Arc<dyn DebugSink>,
}

impl CampaignClient {
    /// Create a new client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignError::Config`] when any credential is missing and
    /// [`CampaignError::Http`] when the HTTP client cannot be constructed.
    pub fn new(config: CampaignConfig) -> Result<Self, CampaignError> {
        if !config.validate() {
            return Err(CampaignError::Config(
                "tenant_id, api_key, and access_token are all required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        let base_url = config
            .base_url_template
            .replace("{ORGANIZATION}", &config.tenant_id);

        Ok(Self {
            client,
            config,
            base_url,
            sink: Arc::new(TracingSink),
        })
    }

    /// Replace the debug-logging sink. Production code keeps the default
    /// tracing-backed sink; tests inject a capturing one.
    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Tenant-resolved base URL all endpoint paths are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the per-call request envelope from the captured credentials.
    fn request_options(&self, body: Option<Value>) -> RequestOptions {
        create_request_options(OptionsParams {
            tenant_id: self.config.tenant_id.clone(),
            api_key: self.config.api_key.clone(),
            access_token: self.config.access_token.clone(),
            body,
        })
    }

    /// Dispatch one API call and return the parsed response body.
    ///
    /// An empty success body maps to `Value::Null` (some workflow commands
    /// return no content). Non-2xx responses become
    /// [`CampaignError::Response`] with status, reason phrase, and body.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, CampaignError> {
        let has_body = body.is_some();
        let options = self.request_options(body);
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        debug!(target: LOG_TARGET, %request_id, "dispatching {method} {url}");

        let record = request_interceptor(
            RequestRecord {
                method: method.to_string(),
                url: url.clone(),
                body: options.request_body.clone(),
            },
            self.sink.as_ref(),
        );

        let mut builder = self
            .client
            .request(method, &url)
            .bearer_auth(options.bearer_token())
            .header(API_KEY_HEADER, options.api_key());

        if has_body {
            builder = builder
                .header("Content-Type", "application/json")
                .json(&record.body);
        }

        let response = builder.send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        let record = response_interceptor(
            ResponseRecord {
                ok: status.is_success(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                url,
                body: bytes.to_vec(),
            },
            self.sink.as_ref(),
        );

        if !record.ok {
            debug!(target: LOG_TARGET, %request_id, "request failed with status {}", record.status);
            let body = serde_json::from_slice(&record.body)
                .unwrap_or_else(|_| Value::String(record.text().into_owned()));
            return Err(CampaignError::Response {
                response: ErrorResponse {
                    status: record.status,
                    status_text: record.status_text,
                    body,
                },
            });
        }

        if record.body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&record.body)?)
    }
}
