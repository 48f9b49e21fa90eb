//! Workflow data models
//!
//! Models for the `workflow/execution` resource and its command endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow execution record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Execution state reported by the server, e.g. `"running"`, `"paused"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Command accepted by the workflow command endpoint.
///
/// Serializes to the lowercase method name the server expects in
/// `{"method": "..."}` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowCommand {
    Start,
    Pause,
    Resume,
    Stop,
}
