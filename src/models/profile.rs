//! Profile data models
//!
//! Models for the `profileAndServices/profile` resource family.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Link;

/// A marketing profile record.
///
/// Only the standard fields are typed; tenant-specific custom fields land
/// in `extra` unchanged. For creation, build a default profile and set the
/// fields you need — `PKey` and the audit timestamps are server-assigned
/// and skipped when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "PKey", default, skip_serializing_if = "String::is_empty")]
    pub pkey: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(rename = "firstName", default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(rename = "lastName", default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(rename = "birthDate", default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(rename = "lastModified", default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Link to this profile's subscriptions collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Link>,

    /// Tenant-specific custom resource fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
