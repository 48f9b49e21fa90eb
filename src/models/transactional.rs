//! Transactional messaging data models
//!
//! Models for the `mc` (Message Center) event endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A transactional event to push to Message Center.
///
/// `ctx` carries the event payload the delivery template personalizes on;
/// its shape is defined per event type in the tenant, so it stays untyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionalEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Earliest delivery time; immediate when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<DateTime<Utc>>,

    /// Time after which the event is dropped undelivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub ctx: Value,
}

/// Server-side processing status of a transactional event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionalEventStatus {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    /// Processing state, e.g. `"pending"`, `"processed"`, `"error"`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_serializes_ctx_payload() {
        let event = TransactionalEvent {
            email: Some("a@example.com".to_string()),
            ctx: json!({"orderId": "A-42", "total": 19.90}),
            ..TransactionalEvent::default()
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({"email": "a@example.com", "ctx": {"orderId": "A-42", "total": 19.90}})
        );
    }

    #[test]
    fn test_status_deserializes() {
        let status: TransactionalEventStatus = serde_json::from_value(json!({
            "PKey": "@evt-1",
            "status": "processed"
        }))
        .unwrap();
        assert_eq!(status.status, "processed");
    }
}
