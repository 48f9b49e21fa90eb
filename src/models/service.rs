//! Service and subscription data models
//!
//! Models for `profileAndServices/service` and for the subscription
//! records linking profiles to services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Link;

/// A marketing service (newsletter, SMS list, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    /// Internal name, unique per tenant
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,

    /// Delivery channel, e.g. `"email"` or `"mobileApp"`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub channel: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Link to this service's subscriptions collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Link>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A subscription joining one profile to one service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Link>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Link>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
