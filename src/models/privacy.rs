//! Privacy (GDPR/CCPA) data models
//!
//! Models for the `privacy/privacyTool` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A privacy request (access or delete) for one data subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivacyRequest {
    /// Namespace the reconciliation value lives in, e.g. `"email"`
    #[serde(rename = "namespaceName", default, skip_serializing_if = "String::is_empty")]
    pub namespace_name: String,

    /// Identifier of the data subject within the namespace
    #[serde(
        rename = "reconciliationValue",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub reconciliation_value: String,

    /// Request kind: `"access"` or `"delete"`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub request_type: String,

    /// Applicable regulation: `"gdpr"` or `"ccpa"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub regulation: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// Server-side status of a previously created privacy request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivacyRequestStatus {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
